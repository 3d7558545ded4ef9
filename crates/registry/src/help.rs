//! Help listings as data. Rendering is left to the front end.

use crate::code::{ParamCode, ParamKind};
use crate::def::{DisplayPriority, ParamDefinition, ParamPayload};
use crate::registry::ParamRegistry;

/// Largest edit distance for which [`ParamRegistry::suggest`] offers a name.
pub const SUGGEST_DISTANCE: usize = 3;

/// Which display tiers a listing includes, taken from `allCommands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ListingLevel {
	/// High priority only.
	#[default]
	Common,
	/// High and low priority.
	More,
	/// Everything.
	All,
}

impl ListingLevel {
	/// Maps the `allCommands` keyword position (`no`, `more`, `all`).
	pub fn from_keyword_index(index: usize) -> Self {
		match index {
			0 => ListingLevel::Common,
			1 => ListingLevel::More,
			_ => ListingLevel::All,
		}
	}

	pub fn includes(self, priority: DisplayPriority) -> bool {
		match self {
			ListingLevel::Common => priority == DisplayPriority::High,
			ListingLevel::More => priority >= DisplayPriority::Low,
			ListingLevel::All => true,
		}
	}
}

/// What a parameter accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueDomain {
	/// Commands take no value.
	None,
	/// Keyword list, with abbreviation markers.
	Keywords(Vec<String>),
	DoubleRange { lower: f64, upper: f64 },
	IntegerRange { lower: i32, upper: i32 },
	/// Any string.
	Text,
}

impl ValueDomain {
	fn of(def: &ParamDefinition) -> Self {
		match def.payload() {
			ParamPayload::Command => ValueDomain::None,
			ParamPayload::Keyword { entries, .. } => {
				ValueDomain::Keywords(entries.iter().map(|e| e.pattern.display()).collect())
			}
			ParamPayload::Double { lower, upper, .. } => ValueDomain::DoubleRange {
				lower: *lower,
				upper: *upper,
			},
			ParamPayload::Integer { lower, upper, .. } => ValueDomain::IntegerRange {
				lower: *lower,
				upper: *upper,
			},
			ParamPayload::String { .. } => ValueDomain::Text,
		}
	}
}

impl std::fmt::Display for ValueDomain {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueDomain::None => Ok(()),
			ValueDomain::Keywords(keywords) => write!(f, "{}", keywords.join(" ")),
			ValueDomain::DoubleRange { lower, upper } => write!(f, "range [{lower:e}, {upper:e}]"),
			ValueDomain::IntegerRange { lower, upper } => write!(f, "range [{lower}, {upper}]"),
			ValueDomain::Text => f.write_str("any text"),
		}
	}
}

/// Everything a listing needs to know about one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct HelpEntry {
	pub code: ParamCode,
	/// Name with the abbreviation marker, e.g. `dualS!implex`.
	pub name: String,
	pub short_help: &'static str,
	pub long_help: &'static str,
	pub priority: DisplayPriority,
	pub kind: ParamKind,
	pub current: String,
	pub default: String,
	pub domain: ValueDomain,
}

impl ParamRegistry {
	pub fn help_entry(&self, code: ParamCode) -> HelpEntry {
		let def = self.definition(code);
		HelpEntry {
			code,
			name: def.pattern().display(),
			short_help: def.short_help(),
			long_help: def.long_help(),
			priority: def.priority(),
			kind: def.kind(),
			current: self.display_value(code),
			default: def.format_value(&def.default_value()),
			domain: ValueDomain::of(def),
		}
	}

	/// Entries visible at `level`, in code order.
	pub fn help_entries(&self, level: ListingLevel) -> Vec<HelpEntry> {
		self.definitions()
			.filter(|def| level.includes(def.priority()))
			.map(|def| self.help_entry(def.code()))
			.collect()
	}

	/// Listing level currently selected by `allCommands`.
	pub fn listing_level(&self) -> ListingLevel {
		self.value(ParamCode::CommandPrintLevel)
			.keyword_index()
			.map(ListingLevel::from_keyword_index)
			.unwrap_or_default()
	}

	/// Closest full parameter name to `token`, if any is near enough.
	pub fn suggest(&self, token: &str) -> Option<&str> {
		let case = self.matcher().case;
		let token = case.fold(token);
		self.definitions()
			.map(|def| (strsim::levenshtein(&token, &case.fold(def.name())), def.name()))
			.filter(|(distance, _)| *distance <= SUGGEST_DISTANCE)
			.min_by_key(|(distance, _)| *distance)
			.map(|(_, name)| name)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn registry() -> ParamRegistry {
		ParamRegistry::new().expect("builtin table builds")
	}

	#[rstest]
	#[case(ListingLevel::Common, DisplayPriority::High, true)]
	#[case(ListingLevel::Common, DisplayPriority::Low, false)]
	#[case(ListingLevel::More, DisplayPriority::Low, true)]
	#[case(ListingLevel::More, DisplayPriority::None, false)]
	#[case(ListingLevel::All, DisplayPriority::None, true)]
	fn listing_level_filters_tiers(
		#[case] level: ListingLevel,
		#[case] priority: DisplayPriority,
		#[case] shown: bool,
	) {
		assert_eq!(level.includes(priority), shown);
	}

	#[test]
	fn listing_follows_all_commands() {
		let mut reg = registry();
		assert_eq!(reg.listing_level(), ListingLevel::Common);
		let common = reg.help_entries(ListingLevel::Common).len();

		reg.commit(ParamCode::CommandPrintLevel, "all").unwrap();
		assert_eq!(reg.listing_level(), ListingLevel::All);
		assert_eq!(reg.help_entries(reg.listing_level()).len(), reg.len());
		assert!(common < reg.len());
	}

	#[test]
	fn entry_describes_keyword_parameter() {
		let reg = registry();
		let entry = reg.help_entry(ParamCode::Presolve);
		assert_eq!(entry.name, "presolve");
		assert_eq!(entry.kind, ParamKind::Keyword);
		assert_eq!(entry.current, "on");
		assert_eq!(entry.default, "on");
		assert_eq!(
			entry.domain,
			ValueDomain::Keywords(vec!["on".into(), "off".into(), "more".into(), "file".into()])
		);
	}

	#[test]
	fn entry_keeps_marker_and_range() {
		let reg = registry();
		let entry = reg.help_entry(ParamCode::MaxIterations);
		assert_eq!(entry.name, "maxIt!erations");
		assert_eq!(
			entry.domain,
			ValueDomain::IntegerRange {
				lower: 0,
				upper: i32::MAX
			}
		);
		assert_eq!(entry.domain.to_string(), format!("range [0, {}]", i32::MAX));
	}

	#[rstest]
	#[case("presolv", Some("presolve"))]
	#[case("PRESOLVEE", Some("presolve"))]
	#[case("dualSimplx", Some("dualSimplex"))]
	#[case("qqqqqqqqqq", None)]
	fn suggest_closest_name(#[case] token: &str, #[case] expected: Option<&str>) {
		assert_eq!(registry().suggest(token), expected);
	}
}
