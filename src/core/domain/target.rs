//! Output target types.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::BundleKind;
use crate::core::constants;

/// How the secrets bundle is fetched and rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SecretsMode {
    /// Fetch with `--format env` and keep the text, written to `secrets.env`.
    #[default]
    Env,
    /// Fetch JSON and render `KEY='value'` lines, written to `variables.sh`.
    Variables,
}

/// A file in the output directory that one bundle is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    file_name: &'static str,
}

impl OutputTarget {
    /// Target for a bundle kind under `dir`.
    pub fn for_bundle(dir: &Path, kind: BundleKind, mode: SecretsMode) -> Self {
        let file_name = match (kind, mode) {
            (BundleKind::Aliases, _) => constants::ALIASES_FILE,
            (BundleKind::Secrets, SecretsMode::Env) => constants::SECRETS_ENV_FILE,
            (BundleKind::Secrets, SecretsMode::Variables) => constants::VARIABLES_FILE,
        };
        Self {
            dir: dir.to_path_buf(),
            file_name,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name)
    }

    /// Whether the file is a shell script (and may take a starter block).
    pub fn is_script(&self) -> bool {
        self.file_name.ends_with(".sh")
    }
}
