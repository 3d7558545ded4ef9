//! Abbreviation patterns such as `dualS!implex`.
//!
//! A pattern is the canonical name with at most one `!` marker. Stripping the
//! marker yields the full name; the marker's position is the shortest prefix a
//! user may type. A pattern without a marker only matches its full name.

use crate::error::RegistryError;

/// Abbreviation marker inside a name pattern.
pub const MARKER: char = '!';

/// Parsed name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
	full: Box<str>,
	min_len: usize,
	len: usize,
}

impl NamePattern {
	/// Parses `pattern`, rejecting empty patterns, a leading marker, or more
	/// than one marker.
	pub fn parse(pattern: &str) -> Result<Self, RegistryError> {
		let invalid = |reason: &'static str| RegistryError::InvalidPattern {
			pattern: pattern.to_string(),
			reason,
		};

		let mut full = String::with_capacity(pattern.len());
		let mut marker_at = None;
		let mut len = 0;
		for ch in pattern.chars() {
			if ch == MARKER {
				if marker_at.is_some() {
					return Err(invalid("more than one abbreviation marker"));
				}
				marker_at = Some(len);
				continue;
			}
			full.push(ch);
			len += 1;
		}

		if len == 0 {
			return Err(invalid("empty name"));
		}
		if marker_at == Some(0) {
			return Err(invalid("abbreviation marker before the first character"));
		}

		Ok(Self {
			full: full.into_boxed_str(),
			min_len: marker_at.unwrap_or(len),
			len,
		})
	}

	/// Canonical name with the marker removed.
	pub fn full_name(&self) -> &str {
		&self.full
	}

	/// Shortest accepted token length, in chars.
	pub fn min_len(&self) -> usize {
		self.min_len
	}

	/// Length of the full name, in chars.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// The shortest accepted abbreviation.
	pub fn min_prefix(&self) -> &str {
		match self.full.char_indices().nth(self.min_len) {
			Some((byte, _)) => &self.full[..byte],
			None => &self.full,
		}
	}

	/// Renders the pattern back with its marker, as help listings show it.
	pub fn display(&self) -> String {
		if self.min_len == self.len {
			return self.full.to_string();
		}
		let split = self.min_prefix().len();
		format!("{}{MARKER}{}", &self.full[..split], &self.full[split..])
	}
}

impl core::fmt::Display for NamePattern {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.full)
	}
}
