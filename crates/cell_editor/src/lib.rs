#![cfg_attr(test, allow(unused_crate_dependencies))]
//! In-cell editors as headless view models.
//!
//! The grid owns focus, keyboard routing, and pixels; an editor owns the
//! text being edited and how it maps back to a [`tally_model::CellValue`].
//! [`EditorKind`] is the closed set of editors, [`CellEditor`] the capability
//! surface they share, and [`Saveable`] the optional pre-save hook.

pub mod checkbox;
pub mod editor;
pub mod formula;
pub mod kind;
pub mod text;

pub use checkbox::CheckboxEditor;
pub use editor::{CellEditor, CellRect, EditorError, EditorOptions, Saveable};
pub use formula::FormulaEditor;
pub use kind::{AnyEditor, EditorKind};
pub use text::TextEditor;
