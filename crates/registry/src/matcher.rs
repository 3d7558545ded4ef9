//! Abbreviation matching and the first-match scan.
//!
//! [`NameMatcher`] compares one token against one pattern. [`scan`] runs that
//! comparison over an ordered sequence and applies the dispatch rule shared by
//! parameter names and keyword values: an exact match wins immediately,
//! otherwise the first partial match is returned together with the number of
//! partial matches seen.

use serde::Deserialize;

use crate::pattern::NamePattern;

/// Outcome of matching one token against one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
	NoMatch,
	/// The token spells the full name.
	Unique,
	/// The token is an accepted abbreviation, shorter than the full name.
	Partial,
}

/// Character comparison used while matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
	/// Exact comparison.
	Sensitive,
	/// ASCII letters compare without case; everything else compares exactly.
	#[default]
	Insensitive,
}

impl CaseSensitivity {
	#[inline]
	pub fn chars_eq(self, a: char, b: char) -> bool {
		match self {
			CaseSensitivity::Sensitive => a == b,
			CaseSensitivity::Insensitive => a.eq_ignore_ascii_case(&b),
		}
	}

	/// Folds `s` into the key used for name uniqueness checks.
	pub fn fold(self, s: &str) -> String {
		match self {
			CaseSensitivity::Sensitive => s.to_string(),
			CaseSensitivity::Insensitive => s.to_ascii_lowercase(),
		}
	}
}

/// Single-pattern comparison capability.
pub trait NameMatcher {
	fn matches(&self, pattern: &NamePattern, token: &str) -> MatchKind;
}

/// Prefix matcher honouring the pattern's minimal abbreviation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixMatcher {
	pub case: CaseSensitivity,
}

impl PrefixMatcher {
	pub const fn new(case: CaseSensitivity) -> Self {
		Self { case }
	}

	/// Number of leading chars `a` and `b` share under this matcher's case rule.
	pub fn common_prefix(&self, a: &str, b: &str) -> usize {
		a.chars()
			.zip(b.chars())
			.take_while(|&(x, y)| self.case.chars_eq(x, y))
			.count()
	}
}

impl NameMatcher for PrefixMatcher {
	fn matches(&self, pattern: &NamePattern, token: &str) -> MatchKind {
		let token_len = token.chars().count();
		if token_len < pattern.min_len() || token_len > pattern.len() {
			return MatchKind::NoMatch;
		}
		if self.common_prefix(pattern.full_name(), token) != token_len {
			return MatchKind::NoMatch;
		}
		if token_len == pattern.len() {
			MatchKind::Unique
		} else {
			MatchKind::Partial
		}
	}
}

/// Result of scanning a token against an ordered sequence of patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<K> {
	/// Exact match, or the first partial match; `None` when nothing matched.
	pub found: Option<K>,
	/// 1 for an exact match, otherwise the number of partial matches.
	pub matches: usize,
}

impl<K: Copy> Resolution<K> {
	pub const INVALID: Self = Self {
		found: None,
		matches: 0,
	};

	pub fn found(&self) -> Option<K> {
		self.found
	}

	pub fn is_invalid(&self) -> bool {
		self.found.is_none()
	}

	/// More than one entry accepted the token. The first is still reported.
	pub fn is_ambiguous(&self) -> bool {
		self.matches > 1
	}
}

/// Scans `items` in order and applies the first-match rule.
pub fn scan<'a, K, M, I>(matcher: &M, items: I, token: &str) -> Resolution<K>
where
	K: Copy,
	M: NameMatcher + ?Sized,
	I: IntoIterator<Item = (K, &'a NamePattern)>,
{
	let mut first = None;
	let mut matches = 0;
	for (key, pattern) in items {
		match matcher.matches(pattern, token) {
			MatchKind::Unique => {
				return Resolution {
					found: Some(key),
					matches: 1,
				};
			}
			MatchKind::Partial => {
				first.get_or_insert(key);
				matches += 1;
			}
			MatchKind::NoMatch => {}
		}
	}
	Resolution {
		found: first,
		matches,
	}
}
