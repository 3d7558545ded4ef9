//! Error types for registration and for runtime lookup and commit.

use crate::code::{ParamCode, ParamKind};

/// Failures while building the parameter table.
///
/// These indicate a mistake in a registration table, not bad user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
	/// A parameter or keyword name is empty or misplaces the `!` marker.
	#[error("invalid name pattern {pattern:?}: {reason}")]
	InvalidPattern {
		/// The pattern as written in the table.
		pattern: String,
		/// What is wrong with it.
		reason: &'static str,
	},

	/// A code was set up by more than one call.
	#[error("{code:?} was set up twice")]
	DuplicateSetup { code: ParamCode },

	/// A code was set up with the setup call of another band.
	#[error("{code:?} is a {expected} parameter but was set up as {got}")]
	KindMismatch {
		code: ParamCode,
		/// Kind of the band the code lives in.
		expected: ParamKind,
		/// Kind of the setup call that was used.
		got: ParamKind,
	},

	/// A code was never set up, or was re-opened before its setup.
	#[error("{code:?} was never set up")]
	MissingSetup { code: ParamCode },

	/// Two parameters share a full name under the active case rule.
	#[error("full name {name:?} is used by both {first:?} and {second:?}")]
	DuplicateName {
		name: String,
		/// Earlier code holding the name.
		first: ParamCode,
		/// Later code repeating it.
		second: ParamCode,
	},

	/// `lower > upper`, or a bound is NaN.
	#[error("{code:?} has lower bound {lower} above upper bound {upper}")]
	InvertedBounds {
		code: ParamCode,
		lower: f64,
		upper: f64,
	},

	/// The declared default keyword is missing from the keyword list.
	#[error("{code:?} declares default keyword {default:?} which is not in its list")]
	UnknownDefault { code: ParamCode, default: String },

	#[error("{code:?} has no keywords")]
	EmptyKeywords { code: ParamCode },

	/// A keyword appears twice under the active case rule.
	#[error("{code:?} lists keyword {keyword:?} twice")]
	DuplicateKeyword { code: ParamCode, keyword: String },

	/// Keywords were appended to a parameter that is not a keyword kind.
	#[error("keywords can only be appended to keyword parameters, not {code:?}")]
	NotKeyword { code: ParamCode },
}

/// Error returned by an external engine when it refuses a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
	/// The engine refused the value.
	#[error("engine rejected value: {reason}")]
	Rejected { reason: String },

	/// The engine has no use for this parameter.
	#[error("engine does not support this parameter")]
	Unsupported,
}

/// Failure of a push function after the value was committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PushError {
	/// The selected keyword's backend is not part of this build.
	#[error("'{keyword}' is not available in this build")]
	Unavailable { keyword: String },

	#[error(transparent)]
	Engine(#[from] EngineError),
}

/// Runtime lookup, validation and commit failures.
///
/// All of these are recoverable. Validation errors leave the stored value
/// untouched; [`ParamError::PushFailed`] is reported after the value was
/// already stored and does not revert it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
	#[error("no parameter matches '{token}'{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	Invalid {
		token: String,
		/// Closest full name, when one is near enough.
		suggestion: Option<String>,
	},

	#[error("'{token}' is ambiguous: it matches {matches} parameters")]
	Ambiguous {
		token: String,
		/// Number of parameters accepting the token.
		matches: usize,
		/// The one the first-match rule would pick.
		first: ParamCode,
	},

	#[error("'{token}' is not a valid {kind} for {name}")]
	Parse {
		/// Full name of the parameter.
		name: String,
		token: String,
		/// Kind the token was expected to parse as.
		kind: ParamKind,
	},

	#[error("{value} is outside [{lower}, {upper}] for {name}")]
	Range {
		name: String,
		/// Parsed value, saturated when it does not fit `i64`.
		value: f64,
		lower: f64,
		upper: f64,
	},

	#[error("'{token}' is not a keyword of {name} (expected one of: {})", .allowed.join(", "))]
	InvalidKeyword {
		name: String,
		token: String,
		/// Allowed keywords, with abbreviation markers.
		allowed: Vec<String>,
	},

	#[error("{name}: {source}")]
	PushFailed {
		name: String,
		#[source]
		source: PushError,
	},

	#[error("no parameter with code {0}")]
	UnknownCode(usize),

	#[error("{name} does not take a value")]
	UnexpectedValue { name: String },

	#[error("{name} needs a value")]
	MissingValue { name: String },
}

impl ParamError {
	/// True for failures raised after the value was stored.
	pub fn is_push_failure(&self) -> bool {
		matches!(self, ParamError::PushFailed { .. })
	}
}
