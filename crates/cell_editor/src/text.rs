//! Free-text editor for ordinary data cells.

use tally_model::CellValue;

use crate::editor::{CellEditor, CellRect, EditorOptions};

/// Plain text editing; an empty buffer saves back as `Null`.
#[derive(Debug)]
pub struct TextEditor {
	text: String,
	cursor: usize,
	rect: Option<CellRect>,
}

impl TextEditor {
	pub fn new(options: &EditorOptions) -> Self {
		let text = options
			.edit_value
			.clone()
			.unwrap_or_else(|| options.cell_value.text());
		let cursor = options.cursor_pos.min(text.chars().count());
		Self {
			text,
			cursor,
			rect: None,
		}
	}

	/// Replaces the buffer, keeping the caret inside it.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.cursor = self.cursor.min(self.text.chars().count());
	}

	pub fn set_cursor(&mut self, cursor: usize) {
		self.cursor = cursor.min(self.text.chars().count());
	}

	pub fn rect(&self) -> Option<CellRect> {
		self.rect
	}
}

impl CellEditor for TextEditor {
	fn attach(&mut self, cell_rect: CellRect) {
		self.rect = Some(cell_rect);
	}

	fn cell_value(&self) -> CellValue {
		if self.text.is_empty() {
			CellValue::Null
		} else {
			CellValue::Text(self.text.clone())
		}
	}

	fn text_value(&self) -> String {
		self.text.clone()
	}

	fn cursor_pos(&self) -> usize {
		self.cursor
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn starts_from_the_cell_text() {
		let editor = TextEditor::new(&EditorOptions::for_cell(CellValue::Number(42.0)));
		assert_eq!(editor.text_value(), "42");
		assert_eq!(editor.cursor_pos(), 0);
	}

	#[test]
	fn typed_prefix_replaces_the_cell_text() {
		let options = EditorOptions::for_cell(CellValue::Text("old".into()))
			.edit_value("n")
			.cursor_pos(1);
		let editor = TextEditor::new(&options);
		assert_eq!(editor.text_value(), "n");
		assert_eq!(editor.cursor_pos(), 1);
	}

	#[test]
	fn cursor_clamps_to_the_text() {
		let options = EditorOptions::for_cell(CellValue::Text("hi".into())).cursor_pos(99);
		let editor = TextEditor::new(&options);
		assert_eq!(editor.cursor_pos(), 2);
		let mut editor = editor;
		editor.set_cursor(100);
		assert_eq!(editor.cursor_pos(), 2);
	}

	#[test]
	fn empty_buffer_saves_as_null() {
		let mut editor = TextEditor::new(&EditorOptions::for_cell(CellValue::Text("x".into())));
		editor.set_text("");
		assert_eq!(editor.cell_value(), CellValue::Null);
		editor.set_text("next");
		assert_eq!(editor.cell_value(), CellValue::Text("next".into()));
	}

	#[test]
	fn attach_records_the_cell_rect() {
		let mut editor = TextEditor::new(&EditorOptions::default());
		assert_eq!(editor.rect(), None);
		editor.attach(CellRect {
			x: 10.0,
			y: 20.0,
			width: 120.0,
			height: 24.0,
		});
		assert_eq!(editor.rect().map(|rect| rect.width), Some(120.0));
	}
}
