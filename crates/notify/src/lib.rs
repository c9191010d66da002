#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Transient notification surfaces: toasts, progress items, the
//! notifications dropdown, and connection status.
//!
//! [`Notifier`] owns the store; cheap clones share it. Rendering layers pull
//! a [`UiState`] snapshot per frame, and the host drives expiry by calling
//! [`Notifier::tick`] from its own timer loop. Nothing in this crate touches
//! a real clock or a renderer.

pub mod actions;
pub mod connect;
pub mod item;
pub mod notifier;
pub mod reporter;
pub mod types;

pub use actions::{
	ActionContext, ActionTarget, BeaconRequest, NotifyAction, ResolvedAction, resolve_action,
};
pub use connect::{
	ConnectState, DisconnectMsg, StatusButton, Tone, disconnect_message, status_button,
};
pub use item::{Notification, NotifyOptions, Progress};
pub use notifier::{NotificationHandle, Notifier, NotifyDefaults, ProgressHandle, UiState};
pub use reporter::NotifierReporter;
pub use types::{ExpireStatus, Expiry, Level, NotifyId, ProgressId};
