//! Settings file management.
//!
//! Handles reading and validating the optional `config.toml` that holds
//! defaults for the command line. A missing file means built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::SecretsMode;
use crate::error::{ConfigError, Result};

/// User settings stored in `<config dir>/brok/config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Secret store CLI to invoke
    pub tool: String,
    /// Doppler project holding the device configs
    pub project: String,
    /// Keys starting with this prefix are never written
    pub reserved_prefix: String,
    /// Seconds to wait for each download
    pub timeout_secs: u64,
    /// How the secrets bundle is fetched and rendered
    pub format: SecretsMode,
    /// Prefix `.sh` outputs with a shebang block
    pub shebang: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: constants::DEFAULT_TOOL.to_string(),
            project: constants::DEFAULT_PROJECT.to_string(),
            reserved_prefix: constants::DEFAULT_RESERVED_PREFIX.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            format: SecretsMode::default(),
            shebang: false,
        }
    }
}

impl Settings {
    /// Default settings file location, if a config dir is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::SETTINGS_DIR).join(constants::SETTINGS_FILE))
    }

    /// Load settings from `path`, or defaults when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but can't be read or parsed, and `ConfigError::InvalidValue`
    /// if it fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for blank strings or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let non_blank = [
            ("tool", &self.tool),
            ("project", &self.project),
            ("reserved_prefix", &self.reserved_prefix),
        ];
        for (field, value) in non_blank {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
