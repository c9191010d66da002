#![cfg_attr(test, allow(unused_crate_dependencies))]
//! The share button: menu composition and action dispatch.
//!
//! [`compose`] turns a [`tally_model::DocSnapshot`] into a data-only
//! [`ShareButtonSpec`] a renderer can draw without further decisions;
//! [`dispatch`] runs the chosen [`MenuAction`] against the collaborator
//! seams in [`collab`], reporting failures instead of returning them.

pub mod collab;
pub mod compose;
pub mod dispatch;
pub mod menu;

pub use collab::{
	CopyFlows, DocPage, ForkResult, LiveDoc, ResourceKind, UserManager, UserManagerOutcome,
	UserManagerRequest,
};
pub use compose::{DocLinks, ShareContext, Shell, compose};
pub use dispatch::{ShareDeps, dispatch, dispatch_primary};
pub use menu::{
	ExportTarget, MenuAction, MenuEntry, MenuItem, PrimaryAction, PrimaryButton, ShareButtonSpec,
};
