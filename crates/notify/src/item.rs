//! Notification and progress items, plus the options builder.

use chrono::{DateTime, Utc};

use crate::actions::NotifyAction;
use crate::types::{ExpireStatus, Expiry, Level, NotifyId, ProgressId};

/// Configuration for one notification.
///
/// Start from [`NotifyOptions::message`] and chain the builders; every field
/// has a sensible default for a transient toast.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyOptions {
	pub title: Option<String>,
	pub message: String,
	pub level: Level,
	/// Follow-up affordances rendered under the message.
	pub actions: Vec<NotifyAction>,
	/// Offer a close button.
	pub can_user_close: bool,
	pub timestamp: DateTime<Utc>,
	pub expiry: Expiry,
	/// Render in the transient toast stack.
	pub in_toast: bool,
	/// Keep in the notifications dropdown.
	pub in_dropdown: bool,
	/// Items sharing a key coalesce instead of stacking up.
	pub key: Option<String>,
}

impl NotifyOptions {
	pub fn message(message: impl Into<String>) -> Self {
		Self {
			title: None,
			message: message.into(),
			level: Level::default(),
			actions: Vec::new(),
			can_user_close: false,
			timestamp: Utc::now(),
			expiry: Expiry::default(),
			in_toast: true,
			in_dropdown: false,
			key: None,
		}
	}

	#[must_use]
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	#[must_use]
	pub fn actions(mut self, actions: Vec<NotifyAction>) -> Self {
		self.actions = actions;
		self
	}

	#[must_use]
	pub fn closable(mut self, can_user_close: bool) -> Self {
		self.can_user_close = can_user_close;
		self
	}

	#[must_use]
	pub fn expiry(mut self, expiry: Expiry) -> Self {
		self.expiry = expiry;
		self
	}

	/// Keep the item until it is closed or disposed.
	#[must_use]
	pub fn sticky(mut self) -> Self {
		self.expiry = Expiry::Never;
		self
	}

	#[must_use]
	pub fn in_toast(mut self, in_toast: bool) -> Self {
		self.in_toast = in_toast;
		self
	}

	#[must_use]
	pub fn in_dropdown(mut self, in_dropdown: bool) -> Self {
		self.in_dropdown = in_dropdown;
		self
	}

	#[must_use]
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	#[must_use]
	pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.timestamp = timestamp;
		self
	}
}

/// A stored notification plus its decay state.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub id: NotifyId,
	pub status: ExpireStatus,
	pub options: NotifyOptions,
}

/// An in-flight operation, shown until it completes or is disposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
	pub id: ProgressId,
	pub name: String,
	/// Human-readable size shown next to the name, e.g. "2.4 MB".
	pub size: Option<String>,
	/// Completion, 0 to 100.
	pub percent: u8,
}
