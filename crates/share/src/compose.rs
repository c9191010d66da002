//! Decides what the share button offers for the open document.
//!
//! Four modes, checked in order: snapshot, unsaved (pre-fork trunk or bare
//! fork), fork of a real trunk, plain trunk. Composition is pure; a missing
//! live document shrinks the menu instead of breaking it.

use tally_model::{DocSnapshot, UrlTarget, can_edit, can_edit_access};

use crate::menu::{
	ExportTarget, MenuAction, MenuEntry, PrimaryAction, PrimaryButton, ShareButtonSpec,
};

/// Environment the client runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shell {
	/// Browser against a hosted server.
	#[default]
	Hosted,
	/// Desktop app with a local file behind the document.
	Desktop,
}

/// Export links taken from the live document handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLinks {
	pub download_url: String,
	pub csv_url: String,
}

/// Inputs to [`compose`] beyond the document itself.
///
/// `links` doubles as the liveness signal: it is `None` while the document
/// is still loading, and the sections that need a live document (exports,
/// work-on-copy) are omitted until it arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareContext<'a> {
	pub shell: Shell,
	pub links: Option<&'a DocLinks>,
}

/// Builds the share button spec for the open document.
pub fn compose(doc: &DocSnapshot, ctx: &ShareContext<'_>) -> ShareButtonSpec {
	if doc.is_snapshot() {
		compose_snapshot(doc, ctx)
	} else if doc.is_pre_fork || doc.is_bare_fork() {
		compose_unsaved(doc, ctx)
	} else if doc.is_fork() {
		compose_fork(doc, ctx)
	} else {
		compose_trunk(doc, ctx)
	}
}

/// A snapshot: the primary leads back to the current version.
fn compose_snapshot(doc: &DocSnapshot, ctx: &ShareContext<'_>) -> ShareButtonSpec {
	let mut entries = manage_users_entries(doc);
	entries.push(save_copy_entry("Save Copy"));
	entries.extend(original_entries(doc, "Current Version"));
	entries.extend(export_entries(ctx));
	ShareButtonSpec {
		primary: Some(PrimaryButton {
			label: "Back to Current",
			action: Some(PrimaryAction::BackToCurrent {
				target: UrlTarget::Doc(doc.original_url_id()),
			}),
		}),
		entries,
	}
}

/// Pre-fork trunk or a fork made from scratch: nothing is saved yet, so the
/// primary saves. A bare fork has no original to return to.
fn compose_unsaved(doc: &DocSnapshot, ctx: &ShareContext<'_>) -> ShareButtonSpec {
	let title = if doc.is_bare_fork() {
		"Save Document"
	} else {
		"Save Copy"
	};
	let mut entries = manage_users_entries(doc);
	entries.push(save_copy_entry(title));
	entries.extend(export_entries(ctx));
	ShareButtonSpec {
		primary: Some(PrimaryButton {
			label: title,
			action: Some(PrimaryAction::SaveCopy { title }),
		}),
		entries,
	}
}

/// A fork of a real trunk. With edit access on the trunk the primary is an
/// inert "Unsaved" tag; replacing the original stays a deliberate menu pick.
fn compose_fork(doc: &DocSnapshot, ctx: &ShareContext<'_>) -> ShareButtonSpec {
	let primary = if can_edit(doc.trunk_access) {
		PrimaryButton {
			label: "Unsaved",
			action: None,
		}
	} else {
		PrimaryButton {
			label: "Save Copy",
			action: Some(PrimaryAction::SaveCopy { title: "Save Copy" }),
		}
	};
	let mut entries = manage_users_entries(doc);
	entries.push(save_copy_entry("Save Copy"));
	entries.extend(original_entries(doc, "Original"));
	entries.extend(export_entries(ctx));
	ShareButtonSpec {
		primary: Some(primary),
		entries,
	}
}

/// A plain trunk document: share icon only, duplicate and export via menu.
fn compose_trunk(doc: &DocSnapshot, ctx: &ShareContext<'_>) -> ShareButtonSpec {
	let mut entries = manage_users_entries(doc);
	entries.push(save_copy_entry("Duplicate Document"));
	entries.extend(work_on_copy_entries(ctx));
	entries.extend(export_entries(ctx));
	ShareButtonSpec {
		primary: None,
		entries,
	}
}

/// Manage-users opens for owners; everyone else sees it greyed out.
fn manage_users_entries(doc: &DocSnapshot) -> Vec<MenuEntry> {
	vec![
		MenuEntry::item_enabled(MenuAction::ManageUsers, can_edit_access(doc.access)),
		MenuEntry::Divider,
	]
}

fn save_copy_entry(title: &'static str) -> MenuEntry {
	MenuEntry::item(MenuAction::SaveCopy { title })
}

/// Links back to the original; replacing it needs edit access on the trunk.
/// `term` is "Original" for forks and "Current Version" for snapshots.
fn original_entries(doc: &DocSnapshot, term: &str) -> Vec<MenuEntry> {
	vec![
		MenuEntry::item(MenuAction::ReturnToOriginal {
			target: UrlTarget::Doc(doc.original_url_id()),
			label: format!("Return to {term}"),
		}),
		MenuEntry::item_enabled(
			MenuAction::ReplaceOriginal {
				label: format!("Replace {term}..."),
			},
			can_edit(doc.trunk_access),
		),
	]
}

/// Offered on live trunks only; forks already are the copy.
fn work_on_copy_entries(ctx: &ShareContext<'_>) -> Vec<MenuEntry> {
	if ctx.links.is_none() {
		return Vec::new();
	}
	vec![
		MenuEntry::item(MenuAction::WorkOnCopy),
		MenuEntry::Note("Edit without affecting the original"),
	]
}

/// Export section. Owns its leading divider, so a menu without exports does
/// not end on one.
fn export_entries(ctx: &ShareContext<'_>) -> Vec<MenuEntry> {
	let Some(links) = ctx.links else {
		return Vec::new();
	};
	let native = match ctx.shell {
		Shell::Desktop => MenuAction::Export(ExportTarget::ShowInFolder),
		Shell::Hosted => MenuAction::Export(ExportTarget::Download {
			url: links.download_url.clone(),
		}),
	};
	vec![
		MenuEntry::Divider,
		MenuEntry::item(native),
		MenuEntry::item(MenuAction::Export(ExportTarget::Csv {
			url: links.csv_url.clone(),
		})),
	]
}

#[cfg(test)]
mod tests;
