//! Notification actions and their resolution into renderable affordances.
//!
//! Actions are stored as bare [`NotifyAction`] values; what a click should do
//! depends on session facts that may change while the item is visible, so
//! resolution happens at render time via [`resolve_action`].

use tally_model::{AppError, UrlTarget};

use crate::item::Notification;

/// Closed set of follow-ups a notification can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyAction {
	/// Point at the public plans page.
	Upgrade,
	/// Point billing managers at the billing page.
	Renew,
	/// Open the support surface, attaching recent application errors.
	ReportProblem,
	/// Open the support surface pre-filled with this item's own error.
	AskForHelp,
}

/// Session facts needed to resolve actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionContext {
	/// The billing page is the one currently open.
	pub on_billing_page: bool,
	/// Whether the user manages the billing account; `None` while unknown.
	pub billing_manager: Option<bool>,
}

/// Payload for the external support/feedback surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeaconRequest {
	/// Attach the notifier's recent application errors.
	pub include_app_errors: bool,
	/// Specific errors to attach verbatim.
	pub errors: Vec<AppError>,
}

/// What clicking a resolved action does.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionTarget {
	/// Follow a link.
	Navigate { target: UrlTarget, new_tab: bool },
	/// Open the support surface.
	Beacon(BeaconRequest),
}

/// A notification action ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAction {
	pub label: &'static str,
	pub target: ActionTarget,
}

/// Resolves an action against the item carrying it and the session context.
///
/// Returns `None` when the action should not be offered at all: `Renew` is
/// pointless on the billing page itself and for users known not to manage
/// the billing account.
pub fn resolve_action(
	action: NotifyAction,
	item: &Notification,
	ctx: &ActionContext,
) -> Option<ResolvedAction> {
	match action {
		NotifyAction::Upgrade => Some(ResolvedAction {
			label: "Upgrade Plan",
			target: ActionTarget::Navigate {
				target: UrlTarget::Plans,
				new_tab: true,
			},
		}),
		NotifyAction::Renew => {
			if ctx.on_billing_page || ctx.billing_manager == Some(false) {
				return None;
			}
			Some(ResolvedAction {
				label: "Renew",
				target: ActionTarget::Navigate {
					target: UrlTarget::Billing,
					new_tab: true,
				},
			})
		}
		NotifyAction::ReportProblem => Some(ResolvedAction {
			label: "Report a problem",
			target: ActionTarget::Beacon(BeaconRequest {
				include_app_errors: true,
				errors: Vec::new(),
			}),
		}),
		NotifyAction::AskForHelp => Some(ResolvedAction {
			label: "Ask for help",
			target: ActionTarget::Beacon(BeaconRequest {
				include_app_errors: true,
				errors: vec![AppError::at(
					item.options.message.clone(),
					item.options.timestamp,
				)],
			}),
		}),
	}
}
