//! Error capture and the reporting seam.
//!
//! Deferred UI actions never surface failures through return values to the
//! render path; they hand them to an [`ErrorReporter`] and carry on.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An application error captured with its wall-clock timestamp, in the shape
/// support tooling expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppError {
	pub message: String,
	pub timestamp: DateTime<Utc>,
}

impl AppError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			timestamp: Utc::now(),
		}
	}

	pub fn at(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
		Self {
			message: message.into(),
			timestamp,
		}
	}
}

/// Sink for failures from deferred UI actions.
pub trait ErrorReporter: Send + Sync {
	fn report(&self, error: &anyhow::Error);
}
