//! Config file loading.

use std::path::Path;

use tracing::debug;

use super::{Config, ConfigError, Result};

impl Config {
	/// Reads and parses a TOML settings file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content).map_err(|err| match err {
			ConfigError::Parse { message, .. } => ConfigError::Parse {
				path: Some(path.to_path_buf()),
				message,
			},
			other => other,
		})?;
		debug!(path = %path.display(), settings = config.settings.len(), "config loaded");
		Ok(config)
	}
}
