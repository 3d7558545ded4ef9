//! Registry configuration.
//!
//! [`RegistryConfig`] holds the build-time knobs. [`Config`] is the TOML
//! settings file: it can override those knobs and carries an ordered list of
//! parameter settings that are committed after the registry is built.

use std::path::{MAIN_SEPARATOR, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ParamError;
use crate::matcher::CaseSensitivity;
use crate::registry::ParamRegistry;

mod load;

/// Build-time options for a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
	/// How parameter names and keywords are compared.
	pub case: CaseSensitivity,
	/// Default for `directory` and the sample directories.
	pub directory: String,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			case: CaseSensitivity::default(),
			directory: default_directory(),
		}
	}
}

/// The current directory with a trailing platform separator.
pub fn default_directory() -> String {
	format!(".{MAIN_SEPARATOR}")
}

/// A settings value as written in the file. Everything is committed through
/// its token form, the same path the command line uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	Bool(bool),
	Integer(i64),
	Float(f64),
	Text(String),
}

impl SettingValue {
	/// Token handed to [`ParamRegistry::commit`]. Booleans become `on`/`off`.
	pub fn to_token(&self) -> String {
		match self {
			SettingValue::Bool(true) => "on".to_string(),
			SettingValue::Bool(false) => "off".to_string(),
			SettingValue::Integer(v) => v.to_string(),
			SettingValue::Float(v) => format!("{v:?}"),
			SettingValue::Text(v) => v.clone(),
		}
	}
}

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub case_sensitive: Option<bool>,
	pub directory: Option<String>,
	/// Parameter settings in file order.
	pub settings: IndexMap<String, SettingValue>,
}

impl Config {
	pub fn from_toml_str(input: &str) -> Result<Self> {
		toml::from_str(input).map_err(|err| ConfigError::Parse {
			path: None,
			message: err.to_string(),
		})
	}

	/// Registry options with this file's overrides applied.
	pub fn registry_config(&self) -> RegistryConfig {
		let mut config = RegistryConfig::default();
		if let Some(sensitive) = self.case_sensitive {
			config.case = if sensitive {
				CaseSensitivity::Sensitive
			} else {
				CaseSensitivity::Insensitive
			};
		}
		if let Some(directory) = &self.directory {
			config.directory = directory.clone();
		}
		config
	}

	/// Commits every setting in file order.
	///
	/// Keys resolve like command-line names, except that ambiguous keys are
	/// refused. A failing setting is reported and skipped; later settings
	/// still apply.
	pub fn apply(&self, registry: &mut ParamRegistry) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();
		for (key, value) in &self.settings {
			let code = match registry.lookup(key) {
				Ok(code) => code,
				Err(source) => {
					warnings.push(ConfigWarning::Unresolved {
						key: key.clone(),
						source,
					});
					continue;
				}
			};
			let name = registry.definition(code).name().to_string();
			if !code.kind().has_value() {
				warnings.push(ConfigWarning::NotASetting {
					key: key.clone(),
					name,
				});
				continue;
			}
			if let Err(source) = registry.commit(code, &value.to_token()) {
				warnings.push(ConfigWarning::Rejected {
					key: key.clone(),
					source,
				});
				continue;
			}
			debug!(key = key.as_str(), param = name.as_str(), "setting applied");
		}
		for warning in &warnings {
			warn!(%warning, "config setting skipped");
		}
		warnings
	}
}

/// Non-fatal problem with one setting.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
	/// The key matched no parameter, or more than one.
	Unresolved { key: String, source: ParamError },
	/// The key names an action or help request, which cannot be configured.
	NotASetting { key: String, name: String },
	/// The value was refused, or the engine refused it after it was stored.
	Rejected { key: String, source: ParamError },
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::Unresolved { key, source } => write!(f, "setting '{key}': {source}"),
			ConfigWarning::NotASetting { key, name } => {
				write!(f, "setting '{key}': {name} is a command, not a setting")
			}
			ConfigWarning::Rejected { key, source } => write!(f, "setting '{key}': {source}"),
		}
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("cannot read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error{}: {message}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
	Parse {
		path: Option<PathBuf>,
		message: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests;
