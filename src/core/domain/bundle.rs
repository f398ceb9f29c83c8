//! Bundle types.
//!
//! A bundle is one named Doppler config pulled for this machine.

use std::fmt;

/// Which of the two per-device bundles is being synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Aliases,
    Secrets,
}

impl BundleKind {
    /// Name used in the Doppler config (`{name}_{suffix}`) and in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aliases => "aliases",
            Self::Secrets => "secrets",
        }
    }

    /// Remote config name for the given suffix.
    pub fn config_name(&self, suffix: &str) -> String {
        format!("{}_{}", self.as_str(), suffix)
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat key/value pairs parsed from one fetch, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBundle {
    entries: Vec<(String, String)>,
}

impl RawBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw key-value pairs, keeping their order.
    pub fn from_pairs(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Append an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a value, comparing keys case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
