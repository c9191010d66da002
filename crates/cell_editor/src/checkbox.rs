//! Toggle editor for boolean cells.

use tally_model::CellValue;

use crate::editor::{CellEditor, CellRect, EditorOptions};

/// Booleans toggle rather than edit; the cursor never moves.
#[derive(Debug)]
pub struct CheckboxEditor {
	value: bool,
	rect: Option<CellRect>,
}

impl CheckboxEditor {
	pub fn new(options: &EditorOptions) -> Self {
		Self {
			value: options.cell_value.is_truthy(),
			rect: None,
		}
	}

	pub fn toggle(&mut self) {
		self.value = !self.value;
	}

	pub fn value(&self) -> bool {
		self.value
	}

	pub fn rect(&self) -> Option<CellRect> {
		self.rect
	}
}

impl CellEditor for CheckboxEditor {
	fn attach(&mut self, cell_rect: CellRect) {
		self.rect = Some(cell_rect);
	}

	fn cell_value(&self) -> CellValue {
		CellValue::Bool(self.value)
	}

	fn text_value(&self) -> String {
		self.value.to_string()
	}

	fn cursor_pos(&self) -> usize {
		0
	}
}
