//! Parameter definitions and per-kind value validation.

use std::num::IntErrorKind;

use crate::code::{ParamCode, ParamKind};
use crate::error::ParamError;
use crate::matcher::{NameMatcher, scan};
use crate::pattern::NamePattern;
use crate::push::PushFunction;
use crate::value::ParamValue;

/// Listing tier of a parameter in help output.
///
/// Ordered so that `None < Low < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DisplayPriority {
	/// Only listed when everything is requested.
	None,
	/// Less used; listed at the intermediate level.
	Low,
	/// Always listed.
	#[default]
	High,
}

/// One allowed keyword of a keyword or boolean parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
	/// Keyword name, optionally with an abbreviation marker.
	pub pattern: NamePattern,
	/// Value forwarded to the engine when this keyword is selected.
	pub code: i32,
	/// False when the feature behind the keyword is not part of this build.
	pub available: bool,
}

impl KeywordEntry {
	pub fn name(&self) -> &str {
		self.pattern.full_name()
	}
}

/// Kind-specific data of a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamPayload {
	/// Action and help parameters.
	Command,
	/// Keyword and boolean parameters.
	Keyword {
		/// Allowed keywords in declaration order; resolution scans them in
		/// this order.
		entries: Vec<KeywordEntry>,
		/// Index into `entries` of the default selection.
		default: usize,
	},
	/// Bounded floating point parameter.
	Double {
		/// Smallest accepted value, inclusive.
		lower: f64,
		/// Largest accepted value, inclusive.
		upper: f64,
		/// Initial value. Not required to lie within the bounds.
		default: f64,
	},
	/// Bounded integer parameter.
	Integer {
		/// Smallest accepted value, inclusive.
		lower: i32,
		/// Largest accepted value, inclusive.
		upper: i32,
		/// Initial value. Not required to lie within the bounds.
		default: i32,
	},
	/// Free text parameter.
	String {
		/// Initial text, stored verbatim.
		default: String,
	},
}

/// A registered parameter. Immutable once the registry is built; current
/// values live in the registry's value table under the same code.
#[derive(Debug, Clone)]
pub struct ParamDefinition {
	pub(crate) code: ParamCode,
	pub(crate) pattern: NamePattern,
	pub(crate) short_help: &'static str,
	pub(crate) long_help: &'static str,
	pub(crate) priority: DisplayPriority,
	pub(crate) payload: ParamPayload,
	pub(crate) push: Option<PushFunction>,
}

impl ParamDefinition {
	pub fn code(&self) -> ParamCode {
		self.code
	}

	pub fn kind(&self) -> ParamKind {
		self.code.kind()
	}

	pub fn pattern(&self) -> &NamePattern {
		&self.pattern
	}

	/// Full name with the abbreviation marker removed.
	pub fn name(&self) -> &str {
		self.pattern.full_name()
	}

	pub fn short_help(&self) -> &'static str {
		self.short_help
	}

	pub fn long_help(&self) -> &'static str {
		self.long_help
	}

	pub fn priority(&self) -> DisplayPriority {
		self.priority
	}

	pub fn payload(&self) -> &ParamPayload {
		&self.payload
	}

	pub fn push_function(&self) -> Option<PushFunction> {
		self.push
	}

	/// Keyword list, for keyword and boolean parameters.
	pub fn keywords(&self) -> Option<&[KeywordEntry]> {
		match &self.payload {
			ParamPayload::Keyword { entries, .. } => Some(entries),
			_ => None,
		}
	}

	/// The value a fresh registry holds for this parameter.
	pub fn default_value(&self) -> ParamValue {
		match &self.payload {
			ParamPayload::Command => ParamValue::Unit,
			ParamPayload::Keyword { entries, default } => ParamValue::Keyword {
				index: *default,
				code: entries[*default].code,
			},
			ParamPayload::Double { default, .. } => ParamValue::Double(*default),
			ParamPayload::Integer { default, .. } => ParamValue::Integer(*default),
			ParamPayload::String { default } => ParamValue::String(default.clone()),
		}
	}

	/// Validates `token` against this definition without touching any state.
	pub fn parse_value<M>(&self, matcher: &M, token: &str) -> Result<ParamValue, ParamError>
	where
		M: NameMatcher + ?Sized,
	{
		match &self.payload {
			ParamPayload::Command => Err(ParamError::UnexpectedValue {
				name: self.name().to_string(),
			}),
			ParamPayload::Keyword { entries, .. } => {
				let items = entries.iter().enumerate().map(|(i, e)| (i, &e.pattern));
				match scan(matcher, items, token).found() {
					Some(index) => Ok(ParamValue::Keyword {
						index,
						code: entries[index].code,
					}),
					None => Err(ParamError::InvalidKeyword {
						name: self.name().to_string(),
						token: token.to_string(),
						allowed: entries.iter().map(|e| e.pattern.display()).collect(),
					}),
				}
			}
			ParamPayload::Double { lower, upper, .. } => {
				let value = token
					.parse::<f64>()
					.ok()
					.filter(|v| !v.is_nan())
					.ok_or_else(|| self.parse_error(token))?;
				if value < *lower || value > *upper {
					return Err(self.range_error(value, *lower, *upper));
				}
				Ok(ParamValue::Double(value))
			}
			ParamPayload::Integer { lower, upper, .. } => {
				let (low, high) = (f64::from(*lower), f64::from(*upper));
				let wide = token.parse::<i64>().map_err(|err| match err.kind() {
					IntErrorKind::PosOverflow => self.range_error(i64::MAX as f64, low, high),
					IntErrorKind::NegOverflow => self.range_error(i64::MIN as f64, low, high),
					_ => self.parse_error(token),
				})?;
				match i32::try_from(wide) {
					Ok(value) if (*lower..=*upper).contains(&value) => Ok(ParamValue::Integer(value)),
					_ => Err(self.range_error(wide as f64, low, high)),
				}
			}
			ParamPayload::String { .. } => Ok(ParamValue::String(token.to_string())),
		}
	}

	/// Renders `value` the way a user would type it back.
	pub fn format_value(&self, value: &ParamValue) -> String {
		match (value, &self.payload) {
			(ParamValue::Keyword { index, .. }, ParamPayload::Keyword { entries, .. }) => entries
				.get(*index)
				.map(|e| e.name().to_string())
				.unwrap_or_default(),
			(ParamValue::Double(v), _) => format!("{v}"),
			(ParamValue::Integer(v), _) => v.to_string(),
			(ParamValue::String(v), _) => v.clone(),
			_ => String::new(),
		}
	}

	fn parse_error(&self, token: &str) -> ParamError {
		ParamError::Parse {
			name: self.name().to_string(),
			token: token.to_string(),
			kind: self.kind(),
		}
	}

	fn range_error(&self, value: f64, lower: f64, upper: f64) -> ParamError {
		ParamError::Range {
			name: self.name().to_string(),
			value,
			lower,
			upper,
		}
	}
}
