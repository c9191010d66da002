#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Shared contracts for the tally client presentation layer.
//!
//! This crate holds the data types the UI layers agree on (documents and
//! their id parts, access roles, cell values, session info) and the trait
//! seams to external collaborators (routing, the document API, error
//! reporting). It contains no rendering and no network code.

pub mod api;
pub mod cell;
pub mod doc;
pub mod report;
pub mod roles;
pub mod session;
pub mod urls;

pub use api::{DocAccessApi, PermissionData, UserAccess};
pub use cell::CellValue;
pub use doc::{DocIdError, DocIdParts, DocSnapshot, NEW_DOC_ID, build_doc_id, parse_doc_id};
pub use report::{AppError, ErrorReporter};
pub use roles::{Role, can_edit, can_edit_access, can_view};
pub use session::{SessionInfo, UserInfo};
pub use urls::{UrlRouter, UrlTarget};
