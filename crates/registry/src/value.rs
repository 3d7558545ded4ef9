//! Committed parameter values.

use crate::code::ParamKind;

/// The current (or default) value of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	/// Action and help parameters carry nothing.
	Unit,
	/// Selected keyword, by position in the keyword list and by its code.
	Keyword {
		/// Position in the definition's keyword list.
		index: usize,
		/// Engine code of that keyword.
		code: i32,
	},
	/// Committed double, within the definition's bounds.
	Double(f64),
	/// Committed integer, within the definition's bounds.
	Integer(i32),
	/// Committed text, stored verbatim.
	String(String),
}

impl ParamValue {
	pub fn as_double(&self) -> Option<f64> {
		match self {
			ParamValue::Double(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i32> {
		match self {
			ParamValue::Integer(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Keyword list position of the selection.
	pub fn keyword_index(&self) -> Option<usize> {
		match self {
			ParamValue::Keyword { index, .. } => Some(*index),
			_ => None,
		}
	}

	/// Numeric code attached to the selected keyword.
	pub fn keyword_code(&self) -> Option<i32> {
		match self {
			ParamValue::Keyword { code, .. } => Some(*code),
			_ => None,
		}
	}

	/// Returns true if this value can be stored in a parameter of `kind`.
	pub fn matches_kind(&self, kind: ParamKind) -> bool {
		matches!(
			(self, kind),
			(ParamValue::Unit, ParamKind::Help | ParamKind::Action)
				| (ParamValue::Keyword { .. }, ParamKind::Keyword | ParamKind::Boolean)
				| (ParamValue::Double(_), ParamKind::Double)
				| (ParamValue::Integer(_), ParamKind::Integer)
				| (ParamValue::String(_), ParamKind::String)
		)
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			ParamValue::Unit => "unit",
			ParamValue::Keyword { .. } => "keyword",
			ParamValue::Double(_) => "double",
			ParamValue::Integer(_) => "integer",
			ParamValue::String(_) => "string",
		}
	}
}

impl From<f64> for ParamValue {
	fn from(v: f64) -> Self {
		ParamValue::Double(v)
	}
}

impl From<i32> for ParamValue {
	fn from(v: i32) -> Self {
		ParamValue::Integer(v)
	}
}

impl From<String> for ParamValue {
	fn from(v: String) -> Self {
		ParamValue::String(v)
	}
}

impl From<&str> for ParamValue {
	fn from(v: &str) -> Self {
		ParamValue::String(v.to_string())
	}
}
