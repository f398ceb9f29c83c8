//! Sync orchestrator.
//!
//! Fetches both bundles concurrently, then renders and writes each one on
//! its own. Nothing here returns an error: every failure is logged and
//! recorded in the [`SyncReport`] so the caller decides how to exit.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::core::bundle;
use crate::core::constants;
use crate::core::domain::{
    BundleKind, ConfigSuffix, OutputTarget, SecretsMode, Stage, StageFailure, SyncReport,
    TargetReport, TargetStatus, WriteOutcome,
};
use crate::core::source::{FetchOutput, SecretSource};
use crate::core::writer;
use crate::error::{Error, FetchError, ParseError};

/// Everything one sync run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub out_dir: PathBuf,
    pub suffix: ConfigSuffix,
    pub mode: SecretsMode,
    pub reserved_prefix: String,
    /// Prefix `.sh` outputs with the script starter block.
    pub starter: bool,
    /// Report what would change without writing.
    pub dry_run: bool,
}

/// Run one sync.
pub async fn run<S>(source: &S, options: &SyncOptions) -> SyncReport
where
    S: SecretSource + ?Sized,
{
    info!(
        suffix = %options.suffix,
        out_dir = %options.out_dir.display(),
        dry_run = options.dry_run,
        "running sync"
    );

    let (aliases, secrets) = tokio::join!(
        source.fetch(BundleKind::Aliases, &options.suffix),
        source.fetch(BundleKind::Secrets, &options.suffix),
    );

    let mut report = SyncReport::default();
    report
        .targets
        .push(sync_bundle(BundleKind::Aliases, aliases, options).await);
    report
        .targets
        .push(sync_bundle(BundleKind::Secrets, secrets, options).await);

    info!(
        ok = report.is_ok(),
        failures = report.failure_count(),
        "sync finished"
    );
    report
}

async fn sync_bundle(
    kind: BundleKind,
    fetched: Result<FetchOutput, FetchError>,
    options: &SyncOptions,
) -> TargetReport {
    let target = OutputTarget::for_bundle(&options.out_dir, kind, options.mode);
    let mut failures = Vec::new();

    let skipped = |failures| TargetReport {
        kind,
        target: target.clone(),
        status: TargetStatus::Skipped,
        failures,
    };

    let output = match fetched {
        Ok(output) => output,
        Err(e) => {
            error!(bundle = %kind, stage = %Stage::Fetch, error = %e, "failed to download bundle");
            failures.push(failure(Stage::Fetch, e));
            return skipped(failures);
        }
    };

    if !output.stderr.is_empty() {
        let e = FetchError::Stderr {
            config: kind.config_name(options.suffix.as_str()),
            stderr: output.stderr.clone(),
        };
        warn!(bundle = %kind, stage = %Stage::Fetch, error = %e, "secret store reported an error");
        failures.push(failure(Stage::Fetch, e));
    }

    // A failed run with nothing on stdout would otherwise wipe the file
    if !output.success && output.stdout.iter().all(u8::is_ascii_whitespace) {
        error!(bundle = %kind, stage = %Stage::Fetch, "download failed with no output, keeping existing file");
        return skipped(failures);
    }

    let content = match render(kind, &output.stdout, &target, options) {
        Ok(content) => content,
        Err(e) => {
            error!(bundle = %kind, stage = %Stage::Parse, error = %e, "failed to parse bundle");
            failures.push(failure(Stage::Parse, e));
            return skipped(failures);
        }
    };

    let status = if options.dry_run {
        match writer::is_current(&target, &content).await {
            Ok(true) => TargetStatus::Completed(WriteOutcome::Unchanged),
            Ok(false) => TargetStatus::WouldWrite(content.len()),
            Err(e) => TargetStatus::Completed(WriteOutcome::Failed(e)),
        }
    } else {
        let private = kind == BundleKind::Secrets;
        TargetStatus::Completed(writer::write(&target, &content, private).await)
    };

    log_status(kind, &target, &status);

    TargetReport {
        kind,
        target,
        status,
        failures,
    }
}

fn render(
    kind: BundleKind,
    raw: &[u8],
    target: &OutputTarget,
    options: &SyncOptions,
) -> Result<String, ParseError> {
    let raw = std::str::from_utf8(raw)?;
    let prefix = options.reserved_prefix.as_str();
    let starter = (options.starter && target.is_script()).then_some(constants::SCRIPT_STARTER);

    match (kind, options.mode) {
        (BundleKind::Aliases, _) => {
            let parsed = bundle::parse_bundle(raw)?;
            info!(bundle = %kind, entries = parsed.len(), "downloaded aliases");
            Ok(bundle::render_aliases(&parsed, prefix, starter))
        }
        (BundleKind::Secrets, SecretsMode::Env) => Ok(bundle::filter_env(raw, prefix)),
        (BundleKind::Secrets, SecretsMode::Variables) => {
            let parsed = bundle::parse_bundle(raw)?;
            info!(bundle = %kind, entries = parsed.len(), "downloaded variables");
            Ok(bundle::render_variables(&parsed, prefix, starter))
        }
    }
}

fn log_status(kind: BundleKind, target: &OutputTarget, status: &TargetStatus) {
    let path = target.path();
    match status {
        TargetStatus::Completed(WriteOutcome::Unchanged) => {
            info!(bundle = %kind, path = %path.display(), "already up to date")
        }
        TargetStatus::Completed(WriteOutcome::Written(bytes)) => {
            info!(bundle = %kind, path = %path.display(), bytes, "wrote file")
        }
        TargetStatus::Completed(WriteOutcome::Failed(e)) => {
            error!(bundle = %kind, stage = %Stage::Write, path = %path.display(), error = %e, "failed to write file")
        }
        TargetStatus::WouldWrite(bytes) => {
            info!(bundle = %kind, path = %path.display(), bytes, "would write file")
        }
        TargetStatus::Skipped => {}
    }
}

fn failure(stage: Stage, error: impl Into<Error>) -> StageFailure {
    StageFailure {
        stage,
        error: error.into(),
    }
}
