//! Error types for brok.
//!
//! Each stage of a sync has its own error enum so the orchestrator can tell
//! a fetch problem from a parse or write problem and decide what to do.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sync incomplete: {failed} of {total} files not updated")]
    Incomplete { failed: usize, total: usize },

    #[error("interrupted")]
    Interrupted,
}

/// Failures talking to the external secret-store CLI.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("secret store tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} did not finish within {}s", timeout.as_secs())]
    Timeout { tool: String, timeout: Duration },

    #[error("download of {config} reported an error: {stderr}")]
    Stderr { config: String, stderr: String },
}

/// Failures turning fetched output into a bundle.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("bundle is not valid utf-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid bundle json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bundle is not a flat object (got {0})")]
    NotAnObject(&'static str),

    #[error("value for '{key}' is not a scalar")]
    NestedValue { key: String },
}

/// Failures writing a rendered script to disk.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("short write to {}: {actual} of {expected} bytes on disk", path.display())]
    Short {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// Settings and option resolution failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
