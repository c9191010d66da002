//! Capability surface shared by every in-cell editor.

use tally_model::CellValue;

/// Bounding box of the edited cell, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellRect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Inputs shared by every editor kind.
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
	/// The cell's stored value.
	pub cell_value: CellValue,
	/// Text to start from instead of the cell value, e.g. what the user
	/// already typed before the editor opened.
	pub edit_value: Option<String>,
	/// Caret position within the initial text, in characters.
	pub cursor_pos: usize,
}

impl EditorOptions {
	pub fn for_cell(cell_value: CellValue) -> Self {
		Self {
			cell_value,
			edit_value: None,
			cursor_pos: 0,
		}
	}

	#[must_use]
	pub fn edit_value(mut self, edit_value: impl Into<String>) -> Self {
		self.edit_value = Some(edit_value.into());
		self
	}

	#[must_use]
	pub fn cursor_pos(mut self, cursor_pos: usize) -> Self {
		self.cursor_pos = cursor_pos;
		self
	}
}

/// Save-preparation failures an editor can raise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
	#[error("formula is empty")]
	EmptyFormula,
}

/// What the grid needs from any open editor.
pub trait CellEditor {
	/// Attaches the editor over the cell's bounding box.
	fn attach(&mut self, cell_rect: CellRect);

	/// Value to write back to the cell on save.
	fn cell_value(&self) -> CellValue;

	/// Text currently shown, used when switching between editing modes.
	fn text_value(&self) -> String;

	/// Caret position within [`CellEditor::text_value`], in characters.
	fn cursor_pos(&self) -> usize;

	/// Editors that need a pre-save step expose it here.
	fn saveable(&mut self) -> Option<&mut dyn Saveable> {
		None
	}
}

/// Optional pre-save hook: normalize state, or refuse the save.
pub trait Saveable {
	fn prep_for_save(&mut self) -> Result<(), EditorError>;
}
