//! Session facts the presentation layer reads but never mutates.

/// The signed-in user, as far as this layer cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
	pub email: String,
	pub name: String,
}

/// Snapshot of session state handed to composers and dispatchers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
	/// Present when somebody is signed in.
	pub user: Option<UserInfo>,
	/// Whether the user manages the org's billing account. `None` while the
	/// billing account is unknown (anonymous access, still loading).
	pub billing_manager: Option<bool>,
}
