//! The slice of the document API this layer consumes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// One user's entry in a resource's sharing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccess {
	pub email: String,
	/// `None` for users listed only through inherited access.
	pub role: Option<Role>,
}

/// Sharing state of a document, as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionData {
	/// Cap on roles inherited from the parent resource.
	pub max_inherited_role: Option<Role>,
	pub users: Vec<UserAccess>,
}

/// Document-access calls, implemented by the real API client elsewhere.
#[async_trait]
pub trait DocAccessApi: Send + Sync {
	async fn doc_access(&self, doc_id: &str) -> anyhow::Result<PermissionData>;
}
