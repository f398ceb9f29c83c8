//! Sync report types.

use std::fmt;

use super::{BundleKind, OutputTarget, WriteOutcome};
use crate::error::Error;

/// Pipeline stage a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Parse,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Parse => "parse",
            Self::Write => "write",
        })
    }
}

/// One recorded failure for a bundle.
#[derive(Debug)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: Error,
}

/// What happened to one output target.
#[derive(Debug)]
pub enum TargetStatus {
    /// The writer ran.
    Completed(WriteOutcome),
    /// Dry run: content differs and this many bytes would be written.
    WouldWrite(usize),
    /// Fetch or parse failed outright; the file was left as it was.
    Skipped,
}

/// Per-bundle entry of a sync report.
#[derive(Debug)]
pub struct TargetReport {
    pub kind: BundleKind,
    pub target: OutputTarget,
    pub status: TargetStatus,
    /// Failures recorded along the way, including tolerated ones.
    pub failures: Vec<StageFailure>,
}

impl TargetReport {
    /// Whether the target ended up in the intended state.
    pub fn is_ok(&self) -> bool {
        match &self.status {
            TargetStatus::Completed(outcome) => outcome.is_ok(),
            TargetStatus::WouldWrite(_) => true,
            TargetStatus::Skipped => false,
        }
    }
}

/// Result of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub targets: Vec<TargetReport>,
}

impl SyncReport {
    /// Whether every target is in its intended state.
    pub fn is_ok(&self) -> bool {
        self.targets.iter().all(TargetReport::is_ok)
    }

    /// Total number of failures recorded across targets.
    pub fn failure_count(&self) -> usize {
        self.targets.iter().map(|t| t.failures.len()).sum()
    }

    pub fn target(&self, kind: BundleKind) -> Option<&TargetReport> {
        self.targets.iter().find(|t| t.kind == kind)
    }
}
