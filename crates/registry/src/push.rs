//! Push functions forward committed values to the external engine.
//!
//! The registry never stores raw callbacks. Each definition carries a
//! [`PushFunction`] tag chosen by its kind band, and the tag decides how the
//! committed value reaches the single [`Engine`] the registry owns.

use tracing::{debug, trace};

use crate::code::{ParamCode, ParamKind};
use crate::def::ParamPayload;
use crate::error::{EngineError, PushError};
use crate::registry::ParamRegistry;

/// The external computation engine driven by committed parameters.
pub trait Engine {
	/// Applies the committed value of `code`, read from `params`. Action and
	/// help parameters hold [`ParamValue::Unit`](crate::ParamValue::Unit).
	/// Sibling parameters in `params` may be read to decide how to apply it.
	fn apply(&mut self, code: ParamCode, params: &ParamRegistry) -> Result<(), EngineError>;
}

/// Push behaviour attached to a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushFunction {
	/// Runs an action or help request.
	Command,
	/// Forwards a keyword selection, refusing keywords missing from this build.
	Keyword,
	Double,
	Integer,
}

impl PushFunction {
	/// Band default for `kind`. String parameters are consumed by file I/O
	/// and have no push function.
	pub const fn for_kind(kind: ParamKind) -> Option<Self> {
		match kind {
			ParamKind::Help | ParamKind::Action => Some(PushFunction::Command),
			ParamKind::Keyword | ParamKind::Boolean => Some(PushFunction::Keyword),
			ParamKind::Double => Some(PushFunction::Double),
			ParamKind::Integer => Some(PushFunction::Integer),
			ParamKind::String => None,
		}
	}

	/// Runs the push for `code` with its freshly committed value in `params`.
	///
	/// Without an engine the push succeeds after its own checks; nothing is
	/// forwarded.
	pub fn apply(
		self,
		params: &ParamRegistry,
		code: ParamCode,
		engine: Option<&mut (dyn Engine + '_)>,
	) -> Result<(), PushError> {
		let def = params.definition(code);
		let value = params.value(code);
		if self == PushFunction::Keyword
			&& let (ParamPayload::Keyword { entries, .. }, Some(index)) =
				(def.payload(), value.keyword_index())
			&& let Some(entry) = entries.get(index)
			&& !entry.available
		{
			return Err(PushError::Unavailable {
				keyword: entry.name().to_string(),
			});
		}

		debug_assert!(
			value.matches_kind(def.kind()),
			"{} value pushed to {} parameter {}",
			value.type_name(),
			def.kind(),
			def.name()
		);

		let Some(engine) = engine else {
			trace!(param = def.name(), "no engine attached, push skipped");
			return Ok(());
		};
		debug!(param = def.name(), push = ?self, "forwarding to engine");
		engine.apply(code, params)?;
		Ok(())
	}
}
