//! Config-files command - write this machine's aliases and secrets.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{
    ConfigSuffix, SecretsMode, SyncReport, TargetReport, TargetStatus, WriteOutcome,
};
use crate::core::source::DopplerCli;
use crate::core::sync::{self, SyncOptions};
use crate::error::{Error, Result};

/// Arguments for `brok config-files`.
#[derive(clap::Args, Debug, Default)]
pub struct Args {
    /// Directory to write the files to [default: current directory]
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Suffix of the Doppler config names [default: $DOPPLER_CONFIG_SUFFIX, then host name]
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// How to fetch and write the secrets bundle
    #[arg(long, value_enum)]
    pub format: Option<SecretsMode>,

    /// Secret store CLI to run
    #[arg(long, value_name = "PATH")]
    pub tool: Option<String>,

    /// Doppler project holding the device configs
    #[arg(short, long)]
    pub project: Option<String>,

    /// Seconds to wait for each download
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Start .sh files with a shebang line
    #[arg(long)]
    pub shebang: bool,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Sync the config files for this machine.
pub async fn execute(args: Args, settings: &Settings) -> Result<()> {
    let (source, options) = resolve(args, settings)?;

    output::kv("suffix", &options.suffix);
    output::kv("directory", options.out_dir.display());

    let report = tokio::select! {
        report = sync::run(&source, &options) => report,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, abandoning downloads");
            return Err(Error::Interrupted);
        }
    };

    print_report(&report);

    let failed = report.targets.iter().filter(|t| !t.is_ok()).count();
    if failed > 0 {
        return Err(Error::Incomplete {
            failed,
            total: report.targets.len(),
        });
    }
    Ok(())
}

/// Merge command-line arguments over settings into a source and options.
pub fn resolve(args: Args, settings: &Settings) -> Result<(DopplerCli, SyncOptions)> {
    let out_dir = match args.out_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };

    let env_suffix = std::env::var(constants::SUFFIX_ENV).ok();
    let suffix = ConfigSuffix::resolve(args.suffix.as_deref(), env_suffix.as_deref(), host_name);

    let mode = args.format.unwrap_or(settings.format);
    let timeout = Duration::from_secs(args.timeout.unwrap_or(settings.timeout_secs));
    let source = DopplerCli::new(
        args.tool.unwrap_or_else(|| settings.tool.clone()),
        args.project.unwrap_or_else(|| settings.project.clone()),
        mode,
        timeout,
    );

    info!(suffix = %suffix, out_dir = %out_dir.display(), ?mode, "resolved options");

    let options = SyncOptions {
        out_dir,
        suffix,
        mode,
        reserved_prefix: settings.reserved_prefix.clone(),
        starter: args.shebang || settings.shebang,
        dry_run: args.dry_run,
    };
    Ok((source, options))
}

fn host_name() -> String {
    match whoami::fallible::hostname() {
        Ok(name) => name,
        Err(e) => {
            warn!(error = %e, "could not determine host name");
            constants::FALLBACK_SUFFIX.to_string()
        }
    }
}

fn print_report(report: &SyncReport) {
    for target in &report.targets {
        print_target(target);
    }
    if !report.is_ok() {
        output::hint("run with --verbose for details");
    }
}

fn print_target(report: &TargetReport) {
    let name = output::path(report.target.file_name());

    for failure in &report.failures {
        let msg = format!("{} {}: {}", report.kind, failure.stage, failure.error);
        if report.is_ok() {
            output::warn(&msg);
        } else {
            output::error(&msg);
        }
    }

    match &report.status {
        TargetStatus::Completed(WriteOutcome::Unchanged) => {
            output::success(&format!("{} already up to date", name))
        }
        TargetStatus::Completed(WriteOutcome::Written(bytes)) => {
            output::success(&format!("wrote {} ({} bytes)", name, bytes))
        }
        TargetStatus::Completed(WriteOutcome::Failed(e)) => {
            output::error(&format!("failed to write {}: {}", name, e))
        }
        TargetStatus::WouldWrite(bytes) => {
            output::warn(&format!("would write {} ({} bytes)", name, bytes))
        }
        TargetStatus::Skipped => output::error(&format!("skipped {}", name)),
    }
}
