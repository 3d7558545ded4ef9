//! CLI schema for the pivot binary.
//!
//! Only long flags are defined: every single-dash word, and every word after
//! the first token, belongs to the parameter token stream.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "pivot", version)]
#[command(about = "Set solver parameters and run solver commands")]
#[command(disable_help_flag = true, disable_version_flag = true)]
/// Command-line arguments.
pub struct Cli {
	/// TOML settings file applied before any tokens
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Match parameter names and keywords case-sensitively
	#[arg(long)]
	pub case_sensitive: bool,

	/// Default directory for import and export
	#[arg(long, value_name = "DIR")]
	pub directory: Option<String>,

	/// Log filter directives, e.g. `info` or `pivot_registry=debug` (overridden by RUST_LOG)
	#[arg(long, value_name = "FILTER", default_value = "warn")]
	pub log: String,

	/// Print help
	#[arg(long, action = ArgAction::Help)]
	pub help: Option<bool>,

	/// Print version
	#[arg(long, action = ArgAction::Version)]
	pub version: Option<bool>,

	/// Parameter tokens, e.g. `-presolve off -maxIt 100 -dualS`. Reads
	/// standard input when empty.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
	pub tokens: Vec<String>,
}
