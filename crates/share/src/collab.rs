//! Seams to the collaborators share actions run through.
//!
//! The real implementations (API client, modal dialogs, page model) live
//! elsewhere; the dispatcher only needs these narrow slices, and tests fake
//! them.

use async_trait::async_trait;
use tally_model::{DocSnapshot, PermissionData, UserInfo};

use crate::compose::DocLinks;

/// Handle to the open, live document. Absent while the page is loading.
#[async_trait]
pub trait LiveDoc: Send + Sync {
	/// Forks the document now, returning where to go next.
	async fn fork(&self) -> anyhow::Result<ForkResult>;

	/// Href for downloading the document in its native format.
	fn download_url(&self) -> String;

	/// Href for exporting the active table as CSV.
	fn csv_url(&self) -> String;

	/// Reveals the backing file in the OS file manager.
	async fn show_in_folder(&self) -> anyhow::Result<()>;

	/// Bundles the export urls for composition.
	fn links(&self) -> DocLinks {
		DocLinks {
			download_url: self.download_url(),
			csv_url: self.csv_url(),
		}
	}
}

/// Where a fresh fork lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkResult {
	pub url_id: String,
}

/// Modal-driven copy flows.
#[async_trait]
pub trait CopyFlows: Send + Sync {
	/// Runs the save-copy dialog for `doc`; `title` names the dialog.
	async fn make_copy(&self, doc: &DocSnapshot, title: &str) -> anyhow::Result<()>;

	/// Replaces the document this one derives from with its current state.
	async fn replace_original(
		&self,
		doc: &DocSnapshot,
		original_url_id: &str,
		user: Option<&UserInfo>,
	) -> anyhow::Result<()>;
}

/// Kind of resource a sharing dialog manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
	Organization,
	Workspace,
	Document,
}

/// Inputs for the user-manager modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserManagerRequest {
	pub kind: ResourceKind,
	pub resource_id: String,
	pub name: String,
	pub permission_data: PermissionData,
	/// Highlighted in the user list when present.
	pub active_email: Option<String>,
}

/// How the user-manager modal closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserManagerOutcome {
	/// Changes were saved; sharing state is stale until refreshed.
	Saved,
	Cancelled,
}

/// The user-manager modal itself.
#[async_trait]
pub trait UserManager: Send + Sync {
	async fn show(&self, request: UserManagerRequest) -> anyhow::Result<UserManagerOutcome>;
}

/// Owner of the open document page.
#[async_trait]
pub trait DocPage: Send + Sync {
	/// Re-fetches the current document so fresh sharing state takes effect.
	async fn refresh_current_doc(&self) -> anyhow::Result<()>;
}
