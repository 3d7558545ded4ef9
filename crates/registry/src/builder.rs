//! Two-phase construction of the parameter table.
//!
//! Kind passes call one setup method per code (plus keyword appends). Nothing
//! is linked until [`RegistryBuilder::finish`] runs the final pass, which
//! resolves keyword defaults, checks name uniqueness, fills in push functions
//! and hands the table to a [`ParamRegistry`]. Push functions and commits are
//! only reachable from the finished registry.

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use tracing::debug;

use crate::builtins;
use crate::code::{ParamCode, ParamKind};
use crate::config::RegistryConfig;
use crate::def::{DisplayPriority, KeywordEntry, ParamDefinition, ParamPayload};
use crate::error::RegistryError;
use crate::matcher::CaseSensitivity;
use crate::pattern::NamePattern;
use crate::push::PushFunction;
use crate::registry::ParamRegistry;

/// Collects definitions slot by slot. Table mistakes are recorded and the
/// first one is returned by [`RegistryBuilder::finish`].
pub struct RegistryBuilder {
	config: RegistryConfig,
	slots: Vec<Option<ParamDefinition>>,
	defaults: Vec<Option<String>>,
	push: Vec<Option<PushFunction>>,
	errors: Vec<RegistryError>,
}

impl RegistryBuilder {
	/// Empty builder; every code still has to be set up.
	pub fn new(config: RegistryConfig) -> Self {
		Self {
			config,
			slots: vec![None; ParamCode::COUNT],
			defaults: vec![None; ParamCode::COUNT],
			push: vec![None; ParamCode::COUNT],
			errors: Vec::new(),
		}
	}

	/// Builder with every builtin kind pass already run.
	pub fn with_builtins(config: RegistryConfig) -> Self {
		let mut builder = Self::new(config);
		builtins::register_all(&mut builder);
		builder
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Default working directory, used by directory-like string defaults.
	pub fn directory(&self) -> &str {
		&self.config.directory
	}

	/// Returns true once `code` has been set up.
	pub fn is_set_up(&self, code: ParamCode) -> bool {
		self.slots[code.index()].is_some()
	}

	/// Overrides the band push function for `code`. May run before setup.
	pub fn set_push(&mut self, code: ParamCode, push: Option<PushFunction>) {
		self.push[code.index()] = push;
	}

	/// Assigns `push` to every code of `kind`.
	pub fn set_band_push(&mut self, kind: ParamKind, push: PushFunction) {
		for code in kind.codes() {
			self.set_push(code, Some(push));
		}
	}

	pub fn help(&mut self, code: ParamCode, name: &str, short_help: &'static str) -> Setup<'_> {
		self.setup(code, ParamKind::Help, name, short_help, ParamPayload::Command)
	}

	pub fn action(&mut self, code: ParamCode, name: &str, short_help: &'static str) -> Setup<'_> {
		self.setup(code, ParamKind::Action, name, short_help, ParamPayload::Command)
	}

	pub fn string(
		&mut self,
		code: ParamCode,
		name: &str,
		short_help: &'static str,
		default: impl Into<String>,
	) -> Setup<'_> {
		let payload = ParamPayload::String {
			default: default.into(),
		};
		self.setup(code, ParamKind::String, name, short_help, payload)
	}

	/// Keyword parameter whose first keyword is `default` (code 0). Further
	/// keywords are appended through the returned [`Setup`].
	pub fn keyword(
		&mut self,
		code: ParamCode,
		name: &str,
		short_help: &'static str,
		default: &str,
	) -> Setup<'_> {
		let entries = match NamePattern::parse(default) {
			Ok(pattern) => vec![KeywordEntry {
				pattern,
				code: 0,
				available: true,
			}],
			Err(err) => {
				self.errors.push(err);
				Vec::new()
			}
		};
		self.defaults[code.index()] = Some(default.to_string());
		let payload = ParamPayload::Keyword { entries, default: 0 };
		self.setup(code, ParamKind::Keyword, name, short_help, payload)
	}

	/// Boolean parameter; the keyword list is fixed to `off` (0) and `on` (1).
	pub fn boolean(
		&mut self,
		code: ParamCode,
		name: &str,
		short_help: &'static str,
		default: &str,
	) -> Setup<'_> {
		let mut entries = Vec::with_capacity(2);
		for (kwd, value) in [("off", 0), ("on", 1)] {
			match NamePattern::parse(kwd) {
				Ok(pattern) => entries.push(KeywordEntry {
					pattern,
					code: value,
					available: true,
				}),
				Err(err) => self.errors.push(err),
			}
		}
		self.defaults[code.index()] = Some(default.to_string());
		let payload = ParamPayload::Keyword { entries, default: 0 };
		self.setup(code, ParamKind::Boolean, name, short_help, payload)
	}

	pub fn double(
		&mut self,
		code: ParamCode,
		name: &str,
		short_help: &'static str,
		lower: f64,
		upper: f64,
		default: f64,
	) -> Setup<'_> {
		// Written as a negation so NaN bounds are rejected too.
		if !(lower <= upper) {
			self.errors.push(RegistryError::InvertedBounds { code, lower, upper });
		}
		let payload = ParamPayload::Double {
			lower,
			upper,
			default,
		};
		self.setup(code, ParamKind::Double, name, short_help, payload)
	}

	pub fn integer(
		&mut self,
		code: ParamCode,
		name: &str,
		short_help: &'static str,
		lower: i32,
		upper: i32,
		default: i32,
	) -> Setup<'_> {
		if lower > upper {
			self.errors.push(RegistryError::InvertedBounds {
				code,
				lower: f64::from(lower),
				upper: f64::from(upper),
			});
		}
		let payload = ParamPayload::Integer {
			lower,
			upper,
			default,
		};
		self.setup(code, ParamKind::Integer, name, short_help, payload)
	}

	/// Appends a keyword to an already set up keyword parameter. Its code is
	/// its position in the list.
	pub fn append_keyword(&mut self, code: ParamCode, keyword: &str) {
		self.entry(code).keyword(keyword);
	}

	/// Re-opens the setup of `code`, for appending keywords after the fact.
	pub fn entry(&mut self, code: ParamCode) -> Setup<'_> {
		let def = self.slots[code.index()].as_mut();
		if def.is_none() {
			self.errors.push(RegistryError::MissingSetup { code });
		}
		Setup {
			def,
			errors: &mut self.errors,
		}
	}

	fn setup(
		&mut self,
		code: ParamCode,
		kind: ParamKind,
		name: &str,
		short_help: &'static str,
		payload: ParamPayload,
	) -> Setup<'_> {
		let expected = code.kind();
		let def = if expected != kind {
			self.errors.push(RegistryError::KindMismatch {
				code,
				expected,
				got: kind,
			});
			None
		} else if self.slots[code.index()].is_some() {
			self.errors.push(RegistryError::DuplicateSetup { code });
			None
		} else {
			match NamePattern::parse(name) {
				Ok(pattern) => {
					let slot = &mut self.slots[code.index()];
					*slot = Some(ParamDefinition {
						code,
						pattern,
						short_help,
						long_help: "",
						priority: DisplayPriority::High,
						payload,
						push: None,
					});
					slot.as_mut()
				}
				Err(err) => {
					self.errors.push(err);
					None
				}
			}
		};
		Setup {
			def,
			errors: &mut self.errors,
		}
	}

	/// Final pass: validates the table and links every definition.
	pub fn finish(self) -> Result<ParamRegistry, RegistryError> {
		let Self {
			config,
			slots,
			defaults,
			push,
			errors,
		} = self;

		if let Some(err) = errors.into_iter().next() {
			return Err(err);
		}

		let case = config.case;
		let mut defs = Vec::with_capacity(ParamCode::COUNT);
		let mut names: HashMap<String, ParamCode> = HashMap::default();

		for ((code, slot), (default, push)) in ParamCode::all()
			.zip(slots)
			.zip(defaults.into_iter().zip(push))
		{
			let mut def = slot.ok_or(RegistryError::MissingSetup { code })?;

			if let ParamPayload::Keyword { entries, default: index } = &mut def.payload {
				*index = keyword_default(code, entries, default.as_deref(), case)?;
			}

			if let Some(first) = names.insert(case.fold(def.name()), code) {
				return Err(RegistryError::DuplicateName {
					name: def.name().to_string(),
					first,
					second: code,
				});
			}

			def.code = code;
			def.push = push.or(PushFunction::for_kind(code.kind()));
			defs.push(def);
		}

		debug!(params = defs.len(), ?case, "parameter registry built");
		Ok(ParamRegistry::from_parts(defs, config))
	}
}

fn keyword_default(
	code: ParamCode,
	entries: &[KeywordEntry],
	default: Option<&str>,
	case: CaseSensitivity,
) -> Result<usize, RegistryError> {
	if entries.is_empty() {
		return Err(RegistryError::EmptyKeywords { code });
	}

	let mut seen: HashSet<String> = HashSet::default();
	for entry in entries {
		if !seen.insert(case.fold(entry.name())) {
			return Err(RegistryError::DuplicateKeyword {
				code,
				keyword: entry.name().to_string(),
			});
		}
	}

	let Some(default) = default else {
		return Ok(0);
	};
	let wanted = NamePattern::parse(default)
		.map(|p| case.fold(p.full_name()))
		.unwrap_or_default();
	entries
		.iter()
		.position(|e| case.fold(e.name()) == wanted)
		.ok_or_else(|| RegistryError::UnknownDefault {
			code,
			default: default.to_string(),
		})
}

/// Handle for filling in the optional parts of one definition.
///
/// When the setup call itself failed the handle is inert; the failure is
/// already recorded in the builder.
pub struct Setup<'a> {
	def: Option<&'a mut ParamDefinition>,
	errors: &'a mut Vec<RegistryError>,
}

impl Setup<'_> {
	pub fn long_help(mut self, text: &'static str) -> Self {
		if let Some(def) = self.def.as_deref_mut() {
			def.long_help = text;
		}
		self
	}

	pub fn priority(mut self, priority: DisplayPriority) -> Self {
		if let Some(def) = self.def.as_deref_mut() {
			def.priority = priority;
		}
		self
	}

	/// Appends a keyword whose code is its position in the list.
	pub fn keyword(self, keyword: &str) -> Self {
		self.push_keyword(keyword, None, true)
	}

	/// Appends a keyword with an explicit engine code.
	pub fn keyword_code(self, keyword: &str, code: i32) -> Self {
		self.push_keyword(keyword, Some(code), true)
	}

	/// Appends a keyword whose backing feature is missing from this build.
	pub fn unavailable(self, keyword: &str) -> Self {
		self.push_keyword(keyword, None, false)
	}

	fn push_keyword(mut self, keyword: &str, code: Option<i32>, available: bool) -> Self {
		let Some(def) = self.def.as_deref_mut() else {
			return self;
		};
		let param = def.code;
		let ParamPayload::Keyword { entries, .. } = &mut def.payload else {
			self.errors.push(RegistryError::NotKeyword { code: param });
			return self;
		};
		match NamePattern::parse(keyword) {
			Ok(pattern) => {
				let code = code.unwrap_or(entries.len() as i32);
				entries.push(KeywordEntry {
					pattern,
					code,
					available,
				});
			}
			Err(err) => self.errors.push(err),
		}
		self
	}
}
