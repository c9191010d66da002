//! Access roles and the permission checks the UI keys off.

use serde::{Deserialize, Serialize};

/// Access role on a shared resource, ordered weakest to strongest.
///
/// Serialized in the lowercase form the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Guest,
	Viewer,
	Editor,
	Owner,
}

/// Whether a role (possibly absent) allows changing document content.
pub fn can_edit(role: Option<Role>) -> bool {
	matches!(role, Some(Role::Owner | Role::Editor))
}

/// Whether a role (possibly absent) allows reading document content.
pub fn can_view(role: Option<Role>) -> bool {
	role.is_some()
}

/// Whether a role allows changing who else has access.
pub fn can_edit_access(role: Role) -> bool {
	matches!(role, Role::Owner)
}
