//! Document identity and the per-document snapshot the UI composes from.
//!
//! Url ids follow the form `trunk[~fork[~user]][@snapshot]`. A fork whose
//! trunk segment is [`NEW_DOC_ID`] was created from scratch and has no real
//! trunk document behind it.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Trunk placeholder used by forks created from scratch.
pub const NEW_DOC_ID: &str = "new";

/// Structured form of a document url id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocIdParts {
	pub trunk_id: String,
	pub fork_id: Option<String>,
	pub fork_user_id: Option<u64>,
	pub snapshot_id: Option<String>,
}

/// Malformed document url id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocIdError {
	#[error("empty document id")]
	Empty,
	#[error("empty {part} segment in {id:?}")]
	EmptySegment { part: &'static str, id: String },
	#[error("fork user segment {segment:?} in {id:?} is not numeric")]
	BadForkUser { segment: String, id: String },
	#[error("too many fork segments in {id:?}")]
	TooManySegments { id: String },
}

/// Splits a url id into its trunk, fork, and snapshot parts.
pub fn parse_doc_id(id: &str) -> Result<DocIdParts, DocIdError> {
	if id.is_empty() {
		return Err(DocIdError::Empty);
	}
	let (main, snapshot_id) = match id.split_once('@') {
		Some((_, snapshot)) if snapshot.is_empty() => {
			return Err(DocIdError::EmptySegment { part: "snapshot", id: id.to_string() });
		}
		Some((main, snapshot)) => (main, Some(snapshot.to_string())),
		None => (id, None),
	};
	let mut segments = main.split('~');
	let trunk_id = segments.next().unwrap_or_default();
	if trunk_id.is_empty() {
		return Err(DocIdError::EmptySegment { part: "trunk", id: id.to_string() });
	}
	let fork_id = match segments.next() {
		Some("") => {
			return Err(DocIdError::EmptySegment { part: "fork", id: id.to_string() });
		}
		Some(segment) => Some(segment.to_string()),
		None => None,
	};
	let fork_user_id = match segments.next() {
		Some(segment) => match segment.parse::<u64>() {
			Ok(user) => Some(user),
			Err(_) => {
				return Err(DocIdError::BadForkUser {
					segment: segment.to_string(),
					id: id.to_string(),
				});
			}
		},
		None => None,
	};
	if segments.next().is_some() {
		return Err(DocIdError::TooManySegments { id: id.to_string() });
	}
	Ok(DocIdParts {
		trunk_id: trunk_id.to_string(),
		fork_id,
		fork_user_id,
		snapshot_id,
	})
}

/// Rebuilds the url id for the given parts.
pub fn build_doc_id(parts: &DocIdParts) -> String {
	let mut id = parts.trunk_id.clone();
	if let Some(fork_id) = &parts.fork_id {
		id.push('~');
		id.push_str(fork_id);
		if let Some(user) = parts.fork_user_id {
			id.push('~');
			id.push_str(&user.to_string());
		}
	}
	if let Some(snapshot_id) = &parts.snapshot_id {
		id.push('@');
		id.push_str(snapshot_id);
	}
	id
}

/// Everything the presentation layer needs to know about the open document.
///
/// Carries the backend's wire shape plus [`DocIdParts`] rebuilt from `id`,
/// so the parts never disagree with the id they came from. Composers never
/// reach past it into ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireDoc")]
pub struct DocSnapshot {
	/// Full url id, including any fork and snapshot suffixes.
	pub id: String,
	pub name: String,
	#[serde(skip)]
	pub id_parts: DocIdParts,
	/// Trunk opened in "fork on edit" mode: edits will land in a new fork.
	pub is_pre_fork: bool,
	/// Caller's role on this document.
	pub access: Role,
	/// Caller's role on the trunk, when this document derives from one.
	pub trunk_access: Option<Role>,
}

impl DocSnapshot {
	/// Builds a snapshot from a url id, parsing its parts.
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		access: Role,
	) -> Result<Self, DocIdError> {
		let id = id.into();
		let id_parts = parse_doc_id(&id)?;
		Ok(Self {
			id,
			name: name.into(),
			id_parts,
			is_pre_fork: false,
			access,
			trunk_access: None,
		})
	}

	/// Marks the document as a trunk opened in "fork on edit" mode.
	#[must_use]
	pub fn pre_fork(mut self) -> Self {
		self.is_pre_fork = true;
		self
	}

	#[must_use]
	pub fn with_trunk_access(mut self, role: Role) -> Self {
		self.trunk_access = Some(role);
		self
	}

	pub fn is_fork(&self) -> bool {
		self.id_parts.fork_id.is_some()
	}

	/// A fork created from scratch rather than from a real trunk document.
	pub fn is_bare_fork(&self) -> bool {
		self.is_fork() && self.id_parts.trunk_id == NEW_DOC_ID
	}

	pub fn is_snapshot(&self) -> bool {
		self.id_parts.snapshot_id.is_some()
	}

	/// Url id of the document this one was made from: a snapshot points at
	/// the same document minus the snapshot suffix, a fork at its trunk.
	pub fn original_url_id(&self) -> String {
		if self.is_snapshot() {
			let mut parts = self.id_parts.clone();
			parts.snapshot_id = None;
			build_doc_id(&parts)
		} else {
			self.id_parts.trunk_id.clone()
		}
	}
}

/// Wire shape of a document as the backend serves it; the parsed id parts
/// are not part of it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDoc {
	id: String,
	name: String,
	#[serde(default)]
	is_pre_fork: bool,
	access: Role,
	#[serde(default)]
	trunk_access: Option<Role>,
}

impl TryFrom<WireDoc> for DocSnapshot {
	type Error = DocIdError;

	fn try_from(wire: WireDoc) -> Result<Self, Self::Error> {
		let id_parts = parse_doc_id(&wire.id)?;
		Ok(Self {
			id: wire.id,
			name: wire.name,
			id_parts,
			is_pre_fork: wire.is_pre_fork,
			access: wire.access,
			trunk_access: wire.trunk_access,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_plain_trunk_id() {
		let parts = parse_doc_id("sb3PwVFTzm2p").unwrap();
		assert_eq!(parts.trunk_id, "sb3PwVFTzm2p");
		assert_eq!(parts.fork_id, None);
		assert_eq!(parts.fork_user_id, None);
		assert_eq!(parts.snapshot_id, None);
	}

	#[test]
	fn parses_fork_with_user_and_snapshot() {
		let parts = parse_doc_id("sb3Pw~f1abc~17@v42").unwrap();
		assert_eq!(parts.trunk_id, "sb3Pw");
		assert_eq!(parts.fork_id.as_deref(), Some("f1abc"));
		assert_eq!(parts.fork_user_id, Some(17));
		assert_eq!(parts.snapshot_id.as_deref(), Some("v42"));
		assert_eq!(build_doc_id(&parts), "sb3Pw~f1abc~17@v42");
	}

	#[test]
	fn build_skips_absent_parts() {
		let parts = DocIdParts {
			trunk_id: "sb3Pw".into(),
			fork_id: Some("f1abc".into()),
			fork_user_id: None,
			snapshot_id: None,
		};
		assert_eq!(build_doc_id(&parts), "sb3Pw~f1abc");
	}

	#[test]
	fn rejects_malformed_ids() {
		assert_eq!(parse_doc_id(""), Err(DocIdError::Empty));
		assert!(matches!(
			parse_doc_id("doc@"),
			Err(DocIdError::EmptySegment { part: "snapshot", .. })
		));
		assert!(matches!(
			parse_doc_id("doc~"),
			Err(DocIdError::EmptySegment { part: "fork", .. })
		));
		assert!(matches!(
			parse_doc_id("@v1"),
			Err(DocIdError::EmptySegment { part: "trunk", .. })
		));
		assert!(matches!(
			parse_doc_id("doc~f~abc"),
			Err(DocIdError::BadForkUser { .. })
		));
		assert!(matches!(
			parse_doc_id("a~b~1~c"),
			Err(DocIdError::TooManySegments { .. })
		));
	}

	#[test]
	fn snapshot_original_drops_only_the_snapshot_suffix() {
		let doc = DocSnapshot::new("sb3Pw~f1~2@v9", "Q3 Budget", Role::Owner).unwrap();
		assert!(doc.is_snapshot());
		assert!(doc.is_fork());
		assert_eq!(doc.original_url_id(), "sb3Pw~f1~2");
	}

	#[test]
	fn fork_original_is_the_trunk() {
		let doc = DocSnapshot::new("sb3Pw~f1abc", "Q3 Budget", Role::Editor).unwrap();
		assert!(doc.is_fork());
		assert!(!doc.is_bare_fork());
		assert!(!doc.is_snapshot());
		assert_eq!(doc.original_url_id(), "sb3Pw");
	}

	#[test]
	fn bare_fork_has_no_real_trunk() {
		let doc = DocSnapshot::new("new~f2xyz", "Untitled document", Role::Owner).unwrap();
		assert!(doc.is_bare_fork());
	}

	#[test]
	fn wire_form_round_trips_and_rebuilds_parts() {
		let json = r#"{"id":"sb3Pw~f1~7@v3","name":"Budget","isPreFork":false,"access":"editor","trunkAccess":"viewer"}"#;
		let doc: DocSnapshot = serde_json::from_str(json).unwrap();
		assert_eq!(doc.id_parts.fork_id.as_deref(), Some("f1"));
		assert_eq!(doc.id_parts.fork_user_id, Some(7));
		assert_eq!(doc.id_parts.snapshot_id.as_deref(), Some("v3"));
		assert_eq!(doc.trunk_access, Some(Role::Viewer));
		assert_eq!(serde_json::to_string(&doc).unwrap(), json);
	}

	#[test]
	fn wire_form_defaults_the_optional_fields() {
		let json = r#"{"id":"sb3Pw","name":"Budget","access":"owner"}"#;
		let doc: DocSnapshot = serde_json::from_str(json).unwrap();
		assert!(!doc.is_pre_fork);
		assert_eq!(doc.trunk_access, None);
		assert_eq!(doc.id_parts.trunk_id, "sb3Pw");
	}

	#[test]
	fn doc_with_a_malformed_id_is_rejected_on_arrival() {
		let json = r#"{"id":"doc~","name":"Budget","isPreFork":false,"access":"owner","trunkAccess":null}"#;
		assert!(serde_json::from_str::<DocSnapshot>(json).is_err());
	}
}
