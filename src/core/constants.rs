//! Constants used throughout brok.
//!
//! Centralizes magic strings and default values.

/// Secret store CLI invoked when no tool is configured.
pub const DEFAULT_TOOL: &str = "doppler";

/// Doppler project that holds the per-device configs.
pub const DEFAULT_PROJECT: &str = "device-configs";

/// Keys starting with this (case-insensitive) are Doppler metadata.
pub const DEFAULT_RESERVED_PREFIX: &str = "doppler_";

/// Seconds to wait on one fetch subprocess before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the config suffix.
pub const SUFFIX_ENV: &str = "DOPPLER_CONFIG_SUFFIX";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "BROK_LOG";

/// Settings file location relative to the user config dir.
pub const SETTINGS_DIR: &str = "brok";
pub const SETTINGS_FILE: &str = "config.toml";

/// Output file for alias statements.
pub const ALIASES_FILE: &str = "aliases.sh";

/// Output file for secrets in env mode.
pub const SECRETS_ENV_FILE: &str = "secrets.env";

/// Output file for secrets in variables mode.
pub const VARIABLES_FILE: &str = "variables.sh";

/// Starter block written at the top of `.sh` outputs when enabled.
pub const SCRIPT_STARTER: &str = "#!/usr/bin/env sh\n\n";

/// Suffix used when the host name cannot be determined.
pub const FALLBACK_SUFFIX: &str = "localhost";
