//! Error-reporter adapter backed by the notifier.

use tally_model::{AppError, ErrorReporter};

use crate::actions::NotifyAction;
use crate::item::NotifyOptions;
use crate::notifier::Notifier;
use crate::types::Level;

/// Reports failures by logging them, recording an app error for support
/// requests, and raising a closable error toast with an ask-for-help
/// affordance.
pub struct NotifierReporter {
	notifier: Notifier,
}

impl NotifierReporter {
	pub fn new(notifier: Notifier) -> Self {
		Self { notifier }
	}
}

impl ErrorReporter for NotifierReporter {
	fn report(&self, error: &anyhow::Error) {
		let chain = format!("{error:#}");
		tracing::error!(error = %chain, "action.failed");
		let message = error.to_string();
		self.notifier.record_app_error(AppError::new(message.clone()));
		self.notifier.notify(
			NotifyOptions::message(message)
				.level(Level::Error)
				.closable(true)
				.actions(vec![NotifyAction::AskForHelp]),
		);
	}
}
