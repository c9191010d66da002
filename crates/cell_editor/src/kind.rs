//! Editor selection per column type.

use tally_model::CellValue;

use crate::checkbox::CheckboxEditor;
use crate::editor::{CellEditor, CellRect, EditorOptions, Saveable};
use crate::formula::FormulaEditor;
use crate::text::TextEditor;

/// Which editor a column opens when a cell is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
	Text,
	Checkbox,
	Formula,
}

impl EditorKind {
	/// Builds the editor for this kind.
	pub fn open(self, options: &EditorOptions) -> AnyEditor {
		match self {
			Self::Text => AnyEditor::Text(TextEditor::new(options)),
			Self::Checkbox => AnyEditor::Checkbox(CheckboxEditor::new(options)),
			Self::Formula => AnyEditor::Formula(FormulaEditor::new(options)),
		}
	}

	/// Some kinds handle a keypress without opening an editor at all. A
	/// checkbox toggles on space; the returned value is the whole edit.
	pub fn skip_editor(self, typed: Option<&str>, original: &CellValue) -> Option<CellValue> {
		match self {
			Self::Checkbox if typed == Some(" ") => Some(CellValue::Bool(!original.is_truthy())),
			_ => None,
		}
	}
}

/// An open editor of any kind.
#[derive(Debug)]
pub enum AnyEditor {
	Text(TextEditor),
	Checkbox(CheckboxEditor),
	Formula(FormulaEditor),
}

impl CellEditor for AnyEditor {
	fn attach(&mut self, cell_rect: CellRect) {
		match self {
			Self::Text(editor) => editor.attach(cell_rect),
			Self::Checkbox(editor) => editor.attach(cell_rect),
			Self::Formula(editor) => editor.attach(cell_rect),
		}
	}

	fn cell_value(&self) -> CellValue {
		match self {
			Self::Text(editor) => editor.cell_value(),
			Self::Checkbox(editor) => editor.cell_value(),
			Self::Formula(editor) => editor.cell_value(),
		}
	}

	fn text_value(&self) -> String {
		match self {
			Self::Text(editor) => editor.text_value(),
			Self::Checkbox(editor) => editor.text_value(),
			Self::Formula(editor) => editor.text_value(),
		}
	}

	fn cursor_pos(&self) -> usize {
		match self {
			Self::Text(editor) => editor.cursor_pos(),
			Self::Checkbox(editor) => editor.cursor_pos(),
			Self::Formula(editor) => editor.cursor_pos(),
		}
	}

	fn saveable(&mut self) -> Option<&mut dyn Saveable> {
		match self {
			Self::Text(editor) => editor.saveable(),
			Self::Checkbox(editor) => editor.saveable(),
			Self::Formula(editor) => editor.saveable(),
		}
	}
}
