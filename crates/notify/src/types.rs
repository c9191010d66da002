//! Core notification vocabulary: levels, ids, and expiry.

use std::time::Duration;

/// Severity tier of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Level {
	/// Neutral user-facing message.
	#[default]
	Message,
	Info,
	Success,
	Warning,
	Error,
}

/// Id of a notification within one notifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotifyId(pub u64);

/// Id of a progress item within one notifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgressId(pub u64);

/// Controls automatic expiry of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expiry {
	/// Expire after the notifier's default delay.
	#[default]
	Auto,
	/// Stay until closed or disposed.
	Never,
	/// Expire after a specific delay.
	After(Duration),
}

/// Decay state of a stored notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpireStatus {
	/// Fully visible.
	#[default]
	Normal,
	/// Fading out, still rendered.
	Expiring,
	/// Done; dropped from the store at the end of the tick.
	Expired,
}
