//! The cell value contract shared between the grid and its editors.

use serde::{Deserialize, Serialize};

/// A cell's stored value, in the shape the backend serializes it.
///
/// Untagged on the wire: `null`, a bool, a number, or a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
	#[default]
	Null,
	Bool(bool),
	Number(f64),
	Text(String),
}

impl CellValue {
	/// Loose truthiness, used by toggle-style editors.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Bool(value) => *value,
			Self::Number(value) => *value != 0.0,
			Self::Text(text) => !text.is_empty(),
		}
	}

	/// Plain-text form of the value, as an editor would first display it.
	pub fn text(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(value) => value.to_string(),
			Self::Number(value) if value.is_finite() && value.fract() == 0.0 => {
				format!("{value:.0}")
			}
			Self::Number(value) => value.to_string(),
			Self::Text(text) => text.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truthiness_matches_cell_content() {
		assert!(!CellValue::Null.is_truthy());
		assert!(!CellValue::Bool(false).is_truthy());
		assert!(CellValue::Bool(true).is_truthy());
		assert!(!CellValue::Number(0.0).is_truthy());
		assert!(CellValue::Number(-2.5).is_truthy());
		assert!(!CellValue::Text(String::new()).is_truthy());
		assert!(CellValue::Text("x".into()).is_truthy());
	}

	#[test]
	fn text_form_elides_trailing_zeroes_on_integers() {
		assert_eq!(CellValue::Number(42.0).text(), "42");
		assert_eq!(CellValue::Number(-3.0).text(), "-3");
		assert_eq!(CellValue::Number(2.5).text(), "2.5");
		assert_eq!(CellValue::Null.text(), "");
		assert_eq!(CellValue::Bool(true).text(), "true");
		assert_eq!(CellValue::Text("hi".into()).text(), "hi");
	}

	#[test]
	fn wire_form_is_untagged() {
		assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");
		assert_eq!(serde_json::to_string(&CellValue::Number(7.0)).unwrap(), "7.0");
		assert_eq!(
			serde_json::to_string(&CellValue::Text("a".into())).unwrap(),
			"\"a\""
		);
		let value: CellValue = serde_json::from_str("true").unwrap();
		assert_eq!(value, CellValue::Bool(true));
		let value: CellValue = serde_json::from_str("null").unwrap();
		assert_eq!(value, CellValue::Null);
	}
}
