//! Brok - sync per-device aliases and secrets from Doppler.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use brok::cli::output;
use brok::cli::{execute, Cli};
use brok::core::constants;
use brok::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("brok=debug")
        } else {
            EnvFilter::new("brok=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();

    // Subprocess I/O is the only concurrency, one thread is enough
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(&format!("failed to start runtime: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(execute(cli.command, cli.config)) {
        let suggestion = match &e {
            Error::Config(ConfigError::Parse { .. } | ConfigError::InvalidValue { .. }) => {
                Some("fix the settings file or pass --config <PATH>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
