//! The notifier: one shared store behind every transient notification
//! surface, with a tick-driven expiry state machine.
//!
//! Items move `Normal -> Expiring -> Expired` as [`Notifier::tick`] consumes
//! their phase budget; `Expired` items are dropped in the same tick. Handles
//! returned to callers hold only a weak reference, so a forgotten handle
//! never keeps a disposed notifier alive.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;

use indexmap::IndexMap;
use parking_lot::Mutex;
use tally_model::AppError;

use crate::connect::{ConnectState, DisconnectMsg, disconnect_message};
use crate::item::{Notification, NotifyOptions, Progress};
use crate::types::{ExpireStatus, Expiry, NotifyId, ProgressId};

/// Timing defaults for the expiry state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyDefaults {
	/// How long an auto-expiring item stays fully visible.
	pub expire_delay: Duration,
	/// How long the fade-out lasts once expiry starts.
	pub fade_delay: Duration,
}

impl Default for NotifyDefaults {
	fn default() -> Self {
		Self {
			expire_delay: Duration::from_secs(5),
			fade_delay: Duration::from_millis(250),
		}
	}
}

/// App errors kept around for support requests.
const MAX_APP_ERRORS: usize = 8;

#[derive(Debug)]
struct NotifyEntry {
	item: Notification,
	/// Time left in the current phase; `None` for items that never expire.
	remaining: Option<Duration>,
}

#[derive(Debug)]
struct NotifierInner {
	defaults: NotifyDefaults,
	items: IndexMap<NotifyId, NotifyEntry>,
	progress: IndexMap<ProgressId, Progress>,
	connect_state: ConnectState,
	app_errors: VecDeque<AppError>,
	next_notify_id: u64,
	next_progress_id: u64,
}

impl NotifierInner {
	fn new(defaults: NotifyDefaults) -> Self {
		Self {
			defaults,
			items: IndexMap::new(),
			progress: IndexMap::new(),
			connect_state: ConnectState::default(),
			app_errors: VecDeque::new(),
			next_notify_id: 1,
			next_progress_id: 1,
		}
	}
}

/// Data-only snapshot of notifier state for a rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
	/// Transient toast stack, oldest first.
	pub toasts: Vec<Notification>,
	/// In-flight operations, oldest first.
	pub progress_items: Vec<Progress>,
	/// Items pinned into the notifications dropdown, oldest first.
	pub dropdown_items: Vec<Notification>,
	pub connect_state: ConnectState,
	/// Connection warning for the dropdown, when not connected.
	pub disconnect_msg: Option<DisconnectMsg>,
}

/// Shared store behind toasts, progress items, the dropdown, and the
/// connection indicator.
///
/// Clones are cheap and share state. Time only moves through
/// [`Notifier::tick`], so the host decides the clock.
#[derive(Clone)]
pub struct Notifier {
	inner: Arc<Mutex<NotifierInner>>,
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

impl Notifier {
	pub fn new() -> Self {
		Self::with_defaults(NotifyDefaults::default())
	}

	pub fn with_defaults(defaults: NotifyDefaults) -> Self {
		Self {
			inner: Arc::new(Mutex::new(NotifierInner::new(defaults))),
		}
	}

	/// Adds a notification, coalescing with a live item sharing its key.
	///
	/// The handle does not own the item: dropping it leaves the item to
	/// expire (or stick) on its own, disposing removes it immediately.
	pub fn notify(&self, options: NotifyOptions) -> NotificationHandle {
		let mut inner = self.inner.lock();
		let defaults = inner.defaults;
		if let Some(key) = options.key.clone() {
			let existing = inner.items.values_mut().find(|entry| {
				entry.item.status == ExpireStatus::Normal
					&& entry.item.options.key.as_deref() == Some(key.as_str())
			});
			if let Some(entry) = existing {
				let id = entry.item.id;
				entry.remaining = phase_budget(options.expiry, defaults.expire_delay);
				entry.item.options = options;
				tracing::debug!(id = id.0, key = %key, "notify.refresh");
				return self.notification_handle(id);
			}
		}
		let id = NotifyId(inner.next_notify_id);
		inner.next_notify_id += 1;
		let remaining = phase_budget(options.expiry, defaults.expire_delay);
		tracing::debug!(id = id.0, level = ?options.level, "notify.push");
		inner.items.insert(
			id,
			NotifyEntry {
				item: Notification {
					id,
					status: ExpireStatus::Normal,
					options,
				},
				remaining,
			},
		);
		self.notification_handle(id)
	}

	/// Posts a plain closable message at the default level.
	pub fn user_message(&self, message: impl Into<String>) -> NotificationHandle {
		self.notify(NotifyOptions::message(message).closable(true))
	}

	/// Starts tracking an operation. Progress items ignore the expiry clock;
	/// they leave when they reach 100 percent or are disposed.
	pub fn start_progress(
		&self,
		name: impl Into<String>,
		size: Option<String>,
	) -> ProgressHandle {
		let mut inner = self.inner.lock();
		let id = ProgressId(inner.next_progress_id);
		inner.next_progress_id += 1;
		let name = name.into();
		tracing::debug!(id = id.0, name = %name, "progress.start");
		inner.progress.insert(
			id,
			Progress {
				id,
				name,
				size,
				percent: 0,
			},
		);
		ProgressHandle {
			id,
			store: Arc::downgrade(&self.inner),
		}
	}

	/// Records an application error for later support requests. Only the
	/// most recent few are kept.
	pub fn record_app_error(&self, error: AppError) {
		let mut inner = self.inner.lock();
		inner.app_errors.push_back(error);
		while inner.app_errors.len() > MAX_APP_ERRORS {
			inner.app_errors.pop_front();
		}
	}

	/// Recorded application errors, oldest first.
	pub fn app_errors(&self) -> Vec<AppError> {
		self.inner.lock().app_errors.iter().cloned().collect()
	}

	pub fn set_connect_state(&self, state: ConnectState) {
		let mut inner = self.inner.lock();
		if inner.connect_state == state {
			return;
		}
		tracing::info!(state = ?state, "connect.state");
		inner.connect_state = state;
	}

	pub fn connect_state(&self) -> ConnectState {
		self.inner.lock().connect_state
	}

	/// Advances expiry by `delta`. One tick moves an item at most one phase,
	/// so a huge delta still fades before it drops.
	pub fn tick(&self, delta: Duration) {
		let mut inner = self.inner.lock();
		let fade_delay = inner.defaults.fade_delay;
		for entry in inner.items.values_mut() {
			advance(entry, delta, fade_delay);
		}
		let before = inner.items.len();
		inner
			.items
			.retain(|_, entry| entry.item.status != ExpireStatus::Expired);
		let expired = before - inner.items.len();
		if expired > 0 {
			tracing::debug!(count = expired, "notify.expired");
		}
	}

	/// Snapshot of everything a rendering layer needs.
	pub fn ui_state(&self) -> UiState {
		let inner = self.inner.lock();
		let toasts = inner
			.items
			.values()
			.filter(|entry| entry.item.options.in_toast)
			.map(|entry| entry.item.clone())
			.collect();
		let dropdown_items = inner
			.items
			.values()
			.filter(|entry| entry.item.options.in_dropdown)
			.map(|entry| entry.item.clone())
			.collect();
		UiState {
			toasts,
			progress_items: inner.progress.values().cloned().collect(),
			dropdown_items,
			connect_state: inner.connect_state,
			disconnect_msg: disconnect_message(inner.connect_state),
		}
	}

	pub fn is_empty(&self) -> bool {
		let inner = self.inner.lock();
		inner.items.is_empty() && inner.progress.is_empty()
	}

	fn notification_handle(&self, id: NotifyId) -> NotificationHandle {
		NotificationHandle {
			id,
			store: Arc::downgrade(&self.inner),
		}
	}
}

/// Dwell budget for a freshly started or refreshed item.
fn phase_budget(expiry: Expiry, default_delay: Duration) -> Option<Duration> {
	match expiry {
		Expiry::Auto => Some(default_delay),
		Expiry::Never => None,
		Expiry::After(delay) => Some(delay),
	}
}

fn advance(entry: &mut NotifyEntry, delta: Duration, fade_delay: Duration) {
	let Some(remaining) = entry.remaining.as_mut() else {
		return;
	};
	*remaining = remaining.saturating_sub(delta);
	if !remaining.is_zero() {
		return;
	}
	match entry.item.status {
		ExpireStatus::Normal => {
			entry.item.status = ExpireStatus::Expiring;
			entry.remaining = Some(fade_delay);
		}
		ExpireStatus::Expiring => {
			entry.item.status = ExpireStatus::Expired;
			entry.remaining = None;
		}
		ExpireStatus::Expired => {}
	}
}

/// Caller-side handle to a posted notification.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
	id: NotifyId,
	store: Weak<Mutex<NotifierInner>>,
}

impl NotificationHandle {
	pub fn id(&self) -> NotifyId {
		self.id
	}

	/// Whether the item is still stored.
	pub fn is_live(&self) -> bool {
		match self.store.upgrade() {
			Some(inner) => inner.lock().items.contains_key(&self.id),
			None => false,
		}
	}

	/// Removes the item now. Calling again, or after natural expiry, or
	/// after the notifier is gone, does nothing.
	pub fn dispose(&self) {
		let Some(inner) = self.store.upgrade() else {
			return;
		};
		if inner.lock().items.shift_remove(&self.id).is_some() {
			tracing::debug!(id = self.id.0, "notify.dispose");
		}
	}
}

/// Caller-side handle to a progress item.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
	id: ProgressId,
	store: Weak<Mutex<NotifierInner>>,
}

impl ProgressHandle {
	pub fn id(&self) -> ProgressId {
		self.id
	}

	/// Updates completion, clamped to 100. Reaching 100 removes the item.
	pub fn set_progress(&self, percent: u8) {
		let Some(inner) = self.store.upgrade() else {
			return;
		};
		let mut inner = inner.lock();
		let Some(item) = inner.progress.get_mut(&self.id) else {
			return;
		};
		item.percent = percent.min(100);
		if item.percent == 100 {
			inner.progress.shift_remove(&self.id);
			tracing::debug!(id = self.id.0, "progress.done");
		}
	}

	pub fn is_live(&self) -> bool {
		match self.store.upgrade() {
			Some(inner) => inner.lock().progress.contains_key(&self.id),
			None => false,
		}
	}

	/// Removes the item now. Calling again does nothing.
	pub fn dispose(&self) {
		let Some(inner) = self.store.upgrade() else {
			return;
		};
		if inner.lock().progress.shift_remove(&self.id).is_some() {
			tracing::debug!(id = self.id.0, "progress.dispose");
		}
	}
}
