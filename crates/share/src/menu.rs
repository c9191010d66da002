//! Data model of the share button and its menu.
//!
//! Everything here is inert: composition decides what appears, a renderer
//! decides how it looks, and the dispatcher gives items their behavior.

use tally_model::UrlTarget;

/// Share-menu actions the dispatcher understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
	/// Open the user manager for this document.
	ManageUsers,
	/// Start the save-copy flow; `title` names the dialog.
	SaveCopy { title: &'static str },
	/// Navigate back to the document this one derives from.
	ReturnToOriginal { target: UrlTarget, label: String },
	/// Overwrite the original with this document's current state.
	ReplaceOriginal { label: String },
	/// Fork now and continue editing on the copy.
	WorkOnCopy,
	Export(ExportTarget),
}

/// Export affordances; the environment decides which are offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
	/// Download the document in its native format.
	Download { url: String },
	/// Export the active table as CSV.
	Csv { url: String },
	/// Reveal the backing file in the OS file manager.
	ShowInFolder,
}

/// One clickable menu item. Disabled items render greyed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
	pub action: MenuAction,
	pub enabled: bool,
}

/// Ordered share-menu content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
	Item(MenuItem),
	Divider,
	/// Non-interactive caption under an item.
	Note(&'static str),
}

impl MenuEntry {
	pub fn item(action: MenuAction) -> Self {
		Self::Item(MenuItem {
			action,
			enabled: true,
		})
	}

	pub fn item_enabled(action: MenuAction, enabled: bool) -> Self {
		Self::Item(MenuItem { action, enabled })
	}
}

/// Direct action bound to the text half of the share button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAction {
	/// Navigate to the current version of the document.
	BackToCurrent { target: UrlTarget },
	/// Start the save-copy flow.
	SaveCopy { title: &'static str },
}

/// The text half of the share button, when the mode has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryButton {
	pub label: &'static str,
	/// `None` renders an inert tag, not a button.
	pub action: Option<PrimaryAction>,
}

/// Everything a renderer needs for the share button and its menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareButtonSpec {
	/// Labelled half next to the share icon; `None` means icon only.
	pub primary: Option<PrimaryButton>,
	pub entries: Vec<MenuEntry>,
}

impl ShareButtonSpec {
	/// Actions of the enabled items, in menu order.
	pub fn enabled_actions(&self) -> impl Iterator<Item = &MenuAction> {
		self.entries.iter().filter_map(|entry| match entry {
			MenuEntry::Item(item) if item.enabled => Some(&item.action),
			_ => None,
		})
	}
}
