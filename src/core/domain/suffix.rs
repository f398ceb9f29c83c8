//! Config suffix type.
//!
//! Picks which per-device bundle variant to fetch.

use std::fmt;

use crate::core::constants;

/// Suffix appended to the bundle name (`aliases_{suffix}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSuffix(String);

impl ConfigSuffix {
    /// Resolve the suffix from its sources, highest precedence first.
    ///
    /// An explicit value wins over the environment override, which wins over
    /// the lower-cased host name. Blank values count as absent, and a blank
    /// host name falls back to `localhost`. `host` is only called when
    /// neither of the others is set.
    pub fn resolve<F>(explicit: Option<&str>, env: Option<&str>, host: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let pick = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);

        pick(explicit)
            .or_else(|| pick(env))
            .or_else(|| pick(Some(host().as_str())).map(|h| h.to_lowercase()))
            .map(Self)
            .unwrap_or_else(|| Self(constants::FALLBACK_SUFFIX.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
