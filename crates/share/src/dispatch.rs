//! Runs share-menu actions against their collaborators.
//!
//! Failures never travel back into the render path: every action runs to
//! completion and errors go to the reporter, which is expected to surface
//! them as toasts.

use anyhow::Context as _;
use tally_model::{DocAccessApi, DocSnapshot, ErrorReporter, SessionInfo, UrlRouter, UrlTarget};

use crate::collab::{
	CopyFlows, DocPage, LiveDoc, ResourceKind, UserManager, UserManagerOutcome, UserManagerRequest,
};
use crate::menu::{ExportTarget, MenuAction, PrimaryAction};

/// Collaborators a share action may need.
pub struct ShareDeps<'a> {
	pub api: &'a dyn DocAccessApi,
	pub router: &'a dyn UrlRouter,
	pub copy_flows: &'a dyn CopyFlows,
	pub user_manager: &'a dyn UserManager,
	pub doc_page: &'a dyn DocPage,
	/// Absent while the document is loading.
	pub live_doc: Option<&'a dyn LiveDoc>,
	pub session: &'a SessionInfo,
	pub reporter: &'a dyn ErrorReporter,
}

/// Runs a menu action to completion, reporting any failure.
pub async fn dispatch(action: MenuAction, doc: &DocSnapshot, deps: &ShareDeps<'_>) {
	tracing::debug!(action = ?action, doc_id = %doc.id, "share.dispatch");
	if let Err(error) = run(action, doc, deps).await {
		deps.reporter.report(&error);
	}
}

/// Runs the share button's direct action to completion, reporting any
/// failure.
pub async fn dispatch_primary(action: PrimaryAction, doc: &DocSnapshot, deps: &ShareDeps<'_>) {
	tracing::debug!(action = ?action, doc_id = %doc.id, "share.dispatch");
	if let Err(error) = run_primary(action, doc, deps).await {
		deps.reporter.report(&error);
	}
}

async fn run(action: MenuAction, doc: &DocSnapshot, deps: &ShareDeps<'_>) -> anyhow::Result<()> {
	match action {
		MenuAction::ManageUsers => manage_users(doc, deps).await,
		MenuAction::SaveCopy { title } => deps.copy_flows.make_copy(doc, title).await,
		MenuAction::ReturnToOriginal { target, .. } => deps.router.push_url(target).await,
		MenuAction::ReplaceOriginal { .. } => {
			deps.copy_flows
				.replace_original(doc, &doc.original_url_id(), deps.session.user.as_ref())
				.await
		}
		MenuAction::WorkOnCopy => work_on_copy(deps).await,
		MenuAction::Export(ExportTarget::ShowInFolder) => live_doc(deps)?.show_in_folder().await,
		// Plain links; the renderer follows the url itself.
		MenuAction::Export(ExportTarget::Download { .. } | ExportTarget::Csv { .. }) => Ok(()),
	}
}

async fn run_primary(
	action: PrimaryAction,
	doc: &DocSnapshot,
	deps: &ShareDeps<'_>,
) -> anyhow::Result<()> {
	match action {
		PrimaryAction::BackToCurrent { target } => deps.router.push_url(target).await,
		PrimaryAction::SaveCopy { title } => deps.copy_flows.make_copy(doc, title).await,
	}
}

async fn manage_users(doc: &DocSnapshot, deps: &ShareDeps<'_>) -> anyhow::Result<()> {
	let permission_data = deps
		.api
		.doc_access(&doc.id)
		.await
		.context("Failed to fetch document access")?;
	let request = UserManagerRequest {
		kind: ResourceKind::Document,
		resource_id: doc.id.clone(),
		name: doc.name.clone(),
		permission_data,
		active_email: deps.session.user.as_ref().map(|user| user.email.clone()),
	};
	match deps.user_manager.show(request).await? {
		UserManagerOutcome::Saved => deps.doc_page.refresh_current_doc().await,
		UserManagerOutcome::Cancelled => Ok(()),
	}
}

async fn work_on_copy(deps: &ShareDeps<'_>) -> anyhow::Result<()> {
	let fork = live_doc(deps)?.fork().await?;
	deps.router.push_url(UrlTarget::Doc(fork.url_id)).await
}

fn live_doc<'a>(deps: &ShareDeps<'a>) -> anyhow::Result<&'a dyn LiveDoc> {
	deps.live_doc.context("Document is still loading")
}
