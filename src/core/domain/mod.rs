//! Domain types.

mod bundle;
mod outcome;
mod suffix;
mod sync;
mod target;

pub use bundle::{BundleKind, RawBundle};
pub use outcome::WriteOutcome;
pub use suffix::ConfigSuffix;
pub use sync::{Stage, StageFailure, SyncReport, TargetReport, TargetStatus};
pub use target::{OutputTarget, SecretsMode};
