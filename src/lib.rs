//! Brok - sync per-device aliases and secrets from Doppler into shell files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── config_files  # Sync aliases.sh and secrets.env
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # config.toml settings
//!     ├── domain/       # Bundle, target, and report types
//!     ├── source        # Doppler CLI adapter
//!     ├── bundle        # Parse, filter, and render bundles
//!     ├── writer        # Write-if-changed file output
//!     └── sync          # Orchestrates one sync run
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use brok::core::domain::{ConfigSuffix, SecretsMode};
//! use brok::core::source::DopplerCli;
//! use brok::core::sync::{self, SyncOptions};
//!
//! # async fn example() {
//! let source = DopplerCli::new("doppler", "device-configs", SecretsMode::Env, Duration::from_secs(30));
//! let options = SyncOptions {
//!     out_dir: std::env::current_dir().unwrap(),
//!     suffix: ConfigSuffix::resolve(Some("laptop"), None, String::new),
//!     mode: SecretsMode::Env,
//!     reserved_prefix: "doppler_".to_string(),
//!     starter: false,
//!     dry_run: false,
//! };
//! let report = sync::run(&source, &options).await;
//! assert!(report.is_ok());
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
