//! Write outcome type.

use crate::error::WriteError;

/// Result of writing one rendered script.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The file already held identical content; nothing was touched.
    Unchanged,
    /// The file was overwritten with this many bytes.
    Written(usize),
    /// The write failed.
    Failed(WriteError),
}

impl WriteOutcome {
    /// Whether the target ended up holding the rendered content.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}
