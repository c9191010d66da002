//! Formula source editor.

use tally_model::CellValue;

use crate::editor::{CellEditor, CellRect, EditorError, EditorOptions, Saveable};

/// Edits formula source. The `=` that opened the editor is an adornment of
/// the cell, not part of the source, so one leading `=` is stripped on the
/// way in.
#[derive(Debug)]
pub struct FormulaEditor {
	source: String,
	cursor: usize,
	rect: Option<CellRect>,
}

impl FormulaEditor {
	pub fn new(options: &EditorOptions) -> Self {
		let raw = options
			.edit_value
			.clone()
			.unwrap_or_else(|| options.cell_value.text());
		let source = raw.strip_prefix('=').unwrap_or(&raw).to_string();
		let cursor = options.cursor_pos.min(source.chars().count());
		Self {
			source,
			cursor,
			rect: None,
		}
	}

	/// Replaces the source, stripping one leading `=` if present.
	pub fn set_source(&mut self, source: impl Into<String>) {
		let raw = source.into();
		self.source = raw.strip_prefix('=').unwrap_or(&raw).to_string();
		self.cursor = self.cursor.min(self.source.chars().count());
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn rect(&self) -> Option<CellRect> {
		self.rect
	}
}

impl CellEditor for FormulaEditor {
	fn attach(&mut self, cell_rect: CellRect) {
		self.rect = Some(cell_rect);
	}

	fn cell_value(&self) -> CellValue {
		CellValue::Text(self.source.clone())
	}

	fn text_value(&self) -> String {
		self.source.clone()
	}

	fn cursor_pos(&self) -> usize {
		self.cursor
	}

	fn saveable(&mut self) -> Option<&mut dyn Saveable> {
		Some(self)
	}
}

impl Saveable for FormulaEditor {
	/// Trims surrounding whitespace; refuses to save an empty formula.
	fn prep_for_save(&mut self) -> Result<(), EditorError> {
		self.source = self.source.trim().to_string();
		self.cursor = self.cursor.min(self.source.chars().count());
		if self.source.is_empty() {
			return Err(EditorError::EmptyFormula);
		}
		Ok(())
	}
}
