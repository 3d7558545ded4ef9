//! Token-stream session.
//!
//! Each name token is stripped of leading dashes and resolved strictly.
//! Valued parameters take the next token as their value; without one, the
//! current value is printed. Help codes print listings, actions run.

use std::io::{self, Write};

use pivot_registry::{HelpEntry, ListingLevel, ParamCode, ParamKind, ParamRegistry};
use tracing::debug;

/// Line width used when listing bare names.
const WIDTH: usize = 78;

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

pub struct Session<W> {
	registry: ParamRegistry,
	out: W,
	failures: usize,
}

impl<W: Write> Session<W> {
	pub fn new(registry: ParamRegistry, out: W) -> Self {
		Self {
			registry,
			out,
			failures: 0,
		}
	}

	pub fn registry(&self) -> &ParamRegistry {
		&self.registry
	}

	#[cfg(test)]
	pub fn out(&self) -> &W {
		&self.out
	}

	/// Tokens that could not be resolved or committed so far.
	pub fn failures(&self) -> usize {
		self.failures
	}

	pub fn prompt(&mut self) -> io::Result<()> {
		write!(self.out, "pivot: ")?;
		self.out.flush()
	}

	/// Processes `tokens` until they run out or `end` is reached.
	pub fn run<I, S>(&mut self, tokens: I) -> io::Result<Flow>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut tokens = tokens.into_iter();
		while let Some(raw) = tokens.next() {
			let name = strip_dashes(raw.as_ref());
			if name.is_empty() {
				continue;
			}
			let code = match self.registry.lookup(name) {
				Ok(code) => code,
				Err(err) => {
					self.fail(&err)?;
					continue;
				}
			};
			debug!(token = name, param = code.ident(), "token resolved");

			match code.kind() {
				ParamKind::Help => self.help(code)?,
				ParamKind::Action => {
					if self.action(code)? == Flow::Exit {
						return Ok(Flow::Exit);
					}
				}
				_ => match tokens.next() {
					Some(value) => self.set(code, value.as_ref())?,
					None => self.show(code)?,
				},
			}
		}
		Ok(Flow::Continue)
	}

	fn fail(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
		self.failures += 1;
		writeln!(self.out, "{err}")
	}

	fn set(&mut self, code: ParamCode, token: &str) -> io::Result<()> {
		let before = self.registry.display_value(code);
		let result = self.registry.commit(code, token);
		if let Err(err) = &result
			&& !err.is_push_failure()
		{
			return self.fail(err);
		}
		let name = self.registry.definition(code).name();
		let after = self.registry.display_value(code);
		writeln!(self.out, "{name} was changed from {before} to {after}")?;
		match result {
			Err(err) => self.fail(&err),
			Ok(()) => Ok(()),
		}
	}

	fn show(&mut self, code: ParamCode) -> io::Result<()> {
		let name = self.registry.definition(code).name();
		let value = self.registry.display_value(code);
		writeln!(self.out, "{name} has value {value}")
	}

	fn action(&mut self, code: ParamCode) -> io::Result<Flow> {
		if let Err(err) = self.registry.invoke(code) {
			self.fail(&err)?;
		}
		match code {
			ParamCode::Exit => return Ok(Flow::Exit),
			ParamCode::Maximize => self.set(ParamCode::Direction, "maximize")?,
			ParamCode::Minimize => self.set(ParamCode::Direction, "minimize")?,
			_ => {}
		}
		Ok(Flow::Continue)
	}

	fn help(&mut self, code: ParamCode) -> io::Result<()> {
		if let Err(err) = self.registry.invoke(code) {
			self.fail(&err)?;
		}
		match code {
			ParamCode::GeneralQuery => {
				let entries = self.registry.help_entries(self.registry.listing_level());
				self.list(&entries, false)
			}
			ParamCode::FullGeneralQuery => {
				let entries = self.registry.help_entries(ListingLevel::All);
				self.list(&entries, true)
			}
			_ => self.usage(),
		}
	}

	fn usage(&mut self) -> io::Result<()> {
		let help = self.registry.definition(ParamCode::Help).long_help();
		writeln!(self.out, "{help}")?;
		writeln!(
			self.out,
			"Type '?' for the common names, '???' for all of them with a short \
			 description, and set allCommands to 'more' or 'all' to list more with '?'. \
			 Type 'end' to stop."
		)
	}

	/// Prints `entries` grouped by kind. `verbose` bit 1 adds long help,
	/// bit 2 current values, bit 4 the accepted values.
	fn list(&mut self, entries: &[HelpEntry], short_help: bool) -> io::Result<()> {
		let verbose = self.registry.integer(ParamCode::Verbose).unwrap_or(0);
		let detailed = short_help || verbose != 0;

		for kind in ParamKind::ALL {
			let group: Vec<&HelpEntry> = entries.iter().filter(|e| e.kind == kind).collect();
			if group.is_empty() {
				continue;
			}
			writeln!(self.out, "{} parameters:", capitalize(kind.name()))?;
			if !detailed {
				let names: Vec<&str> = group.iter().map(|e| e.name.as_str()).collect();
				for line in wrap(&names, WIDTH) {
					writeln!(self.out, "  {line}")?;
				}
				continue;
			}
			for entry in group {
				writeln!(self.out, "  {:<24} {}", entry.name, entry.short_help)?;
				if verbose & 1 != 0 && !entry.long_help.is_empty() {
					writeln!(self.out, "      {}", entry.long_help)?;
				}
				if verbose & 2 != 0 && kind.has_value() {
					writeln!(self.out, "      current {} (default {})", entry.current, entry.default)?;
				}
				if verbose & 4 != 0 && kind.has_value() {
					writeln!(self.out, "      accepts {}", entry.domain)?;
				}
			}
		}
		Ok(())
	}
}

/// Drops one `--` or `-` prefix from a name token.
pub fn strip_dashes(token: &str) -> &str {
	token
		.strip_prefix("--")
		.or_else(|| token.strip_prefix('-'))
		.unwrap_or(token)
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
		None => String::new(),
	}
}

/// Packs `words` into lines no wider than `width`.
fn wrap(words: &[&str], width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut line = String::new();
	for word in words {
		if !line.is_empty() && line.len() + 1 + word.len() > width {
			lines.push(std::mem::take(&mut line));
		}
		if !line.is_empty() {
			line.push(' ');
		}
		line.push_str(word);
	}
	if !line.is_empty() {
		lines.push(line);
	}
	lines
}

#[cfg(test)]
mod tests;
