//! The built parameter registry.
//!
//! Definitions are immutable after [`RegistryBuilder::finish`]; the registry
//! keeps current values in a table parallel to them and owns the optional
//! engine that push functions forward to.

use tracing::{debug, trace, warn};

use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::config::RegistryConfig;
use crate::def::ParamDefinition;
use crate::error::{ParamError, RegistryError};
use crate::matcher::{PrefixMatcher, Resolution, scan};
use crate::push::Engine;
use crate::value::ParamValue;

pub struct ParamRegistry {
	defs: Box<[ParamDefinition]>,
	values: Box<[ParamValue]>,
	matcher: PrefixMatcher,
	config: RegistryConfig,
	engine: Option<Box<dyn Engine>>,
}

impl std::fmt::Debug for ParamRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ParamRegistry")
			.field("params", &self.defs.len())
			.field("config", &self.config)
			.field("engine", &self.engine.as_ref().map(|_| "<dyn Engine>"))
			.finish()
	}
}

impl ParamRegistry {
	/// Builtin registry with the default configuration.
	pub fn new() -> Result<Self, RegistryError> {
		Self::with_config(RegistryConfig::default())
	}

	/// Builtin registry with `config`.
	pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryError> {
		RegistryBuilder::with_builtins(config).finish()
	}

	pub(crate) fn from_parts(defs: Vec<ParamDefinition>, config: RegistryConfig) -> Self {
		let values = defs.iter().map(ParamDefinition::default_value).collect();
		Self {
			defs: defs.into_boxed_slice(),
			values,
			matcher: PrefixMatcher::new(config.case),
			config,
			engine: None,
		}
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	pub fn matcher(&self) -> &PrefixMatcher {
		&self.matcher
	}

	/// Resolves a name token with the first-match rule.
	///
	/// An exact full-name match wins with a count of 1. Otherwise the first
	/// parameter in code order that accepts the abbreviation is returned,
	/// along with how many parameters accepted it. Callers decide whether an
	/// ambiguous result is acceptable; see [`ParamRegistry::lookup`].
	pub fn resolve(&self, token: &str) -> Resolution<ParamCode> {
		let items = self.defs.iter().map(|def| (def.code, &def.pattern));
		let res = scan(&self.matcher, items, token);
		trace!(token, matches = res.matches, found = ?res.found, "resolve");
		res
	}

	/// Strict resolution: unmatched and ambiguous tokens are errors.
	pub fn lookup(&self, token: &str) -> Result<ParamCode, ParamError> {
		let res = self.resolve(token);
		match res.found {
			None => Err(ParamError::Invalid {
				token: token.to_string(),
				suggestion: self.suggest(token).map(str::to_string),
			}),
			Some(first) if res.is_ambiguous() => Err(ParamError::Ambiguous {
				token: token.to_string(),
				matches: res.matches,
				first,
			}),
			Some(code) => Ok(code),
		}
	}

	/// Parses `token` for `code`, stores it, then runs the push function.
	///
	/// Validation errors leave the stored value untouched. A failing push is
	/// reported as [`ParamError::PushFailed`] but the new value stays stored.
	pub fn commit(&mut self, code: ParamCode, token: &str) -> Result<(), ParamError> {
		let def = &self.defs[code.index()];
		let value = def.parse_value(&self.matcher, token)?;
		debug!(param = def.name(), value = %def.format_value(&value), "parameter committed");
		self.values[code.index()] = value;
		self.push(code)
	}

	/// Runs an action or help parameter.
	pub fn invoke(&mut self, code: ParamCode) -> Result<(), ParamError> {
		let def = &self.defs[code.index()];
		if code.kind().has_value() {
			return Err(ParamError::MissingValue {
				name: def.name().to_string(),
			});
		}
		debug!(param = def.name(), "command invoked");
		self.push(code)
	}

	/// Runs the push function of `code`. The engine is detached for the
	/// duration so the push can read the whole registry.
	fn push(&mut self, code: ParamCode) -> Result<(), ParamError> {
		let Some(push) = self.defs[code.index()].push else {
			return Ok(());
		};
		let mut engine = self.engine.take();
		let result = push.apply(self, code, engine.as_deref_mut());
		self.engine = engine;
		result.map_err(|source| {
			let name = self.defs[code.index()].name();
			warn!(param = name, error = %source, "push failed");
			ParamError::PushFailed {
				name: name.to_string(),
				source,
			}
		})
	}

	pub fn value(&self, code: ParamCode) -> &ParamValue {
		&self.values[code.index()]
	}

	pub fn default_value(&self, code: ParamCode) -> ParamValue {
		self.defs[code.index()].default_value()
	}

	/// Current value as it would be typed back. Empty for commands.
	pub fn display_value(&self, code: ParamCode) -> String {
		self.defs[code.index()].format_value(self.value(code))
	}

	pub fn double(&self, code: ParamCode) -> Option<f64> {
		self.value(code).as_double()
	}

	pub fn integer(&self, code: ParamCode) -> Option<i32> {
		self.value(code).as_integer()
	}

	/// Full name of the selected keyword.
	pub fn keyword(&self, code: ParamCode) -> Option<&str> {
		let index = self.value(code).keyword_index()?;
		self.defs[code.index()]
			.keywords()
			.and_then(|entries| entries.get(index))
			.map(|entry| entry.name())
	}

	pub fn keyword_code(&self, code: ParamCode) -> Option<i32> {
		self.value(code).keyword_code()
	}

	pub fn string(&self, code: ParamCode) -> Option<&str> {
		self.value(code).as_str()
	}

	/// True when the selected keyword is `on`.
	pub fn is_on(&self, code: ParamCode) -> bool {
		self.keyword(code) == Some("on")
	}

	/// Current value of the `directory` parameter.
	pub fn directory(&self) -> &str {
		self.string(ParamCode::Directory).unwrap_or(&self.config.directory)
	}

	/// Restores the default value of `code` without pushing it.
	pub fn reset(&mut self, code: ParamCode) {
		self.values[code.index()] = self.defs[code.index()].default_value();
	}

	pub fn reset_all(&mut self) {
		for (value, def) in self.values.iter_mut().zip(self.defs.iter()) {
			*value = def.default_value();
		}
	}

	/// Attaches `engine`, returning the one it replaces.
	pub fn attach_engine(&mut self, engine: Box<dyn Engine>) -> Option<Box<dyn Engine>> {
		self.engine.replace(engine)
	}

	pub fn detach_engine(&mut self) -> Option<Box<dyn Engine>> {
		self.engine.take()
	}

	pub fn has_engine(&self) -> bool {
		self.engine.is_some()
	}

	pub fn definition(&self, code: ParamCode) -> &ParamDefinition {
		&self.defs[code.index()]
	}

	/// Definition at a raw table index, for callers holding untyped codes.
	pub fn definition_at(&self, index: usize) -> Result<&ParamDefinition, ParamError> {
		let code = ParamCode::try_from(index)?;
		Ok(self.definition(code))
	}

	pub fn definitions(&self) -> impl Iterator<Item = &ParamDefinition> {
		self.defs.iter()
	}

	/// Definitions of one kind band, in code order.
	pub fn definitions_of(&self, kind: ParamKind) -> impl Iterator<Item = &ParamDefinition> {
		kind.codes().map(|code| self.definition(code))
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Pairs of parameters that accept at least one common abbreviation.
	///
	/// Such a pair makes the later parameter unreachable through the shared
	/// abbreviations and makes those tokens ambiguous.
	pub fn overlaps(&self) -> Vec<(ParamCode, ParamCode)> {
		let mut pairs = Vec::new();
		for (i, a) in self.defs.iter().enumerate() {
			for b in &self.defs[i + 1..] {
				let shared = self.matcher.common_prefix(a.name(), b.name());
				if shared >= a.pattern.min_len().max(b.pattern.min_len()) {
					pairs.push((a.code, b.code));
				}
			}
		}
		pairs
	}
}
