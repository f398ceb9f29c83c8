//! Secret source adapter.
//!
//! Downloads a bundle by shelling out to the Doppler CLI:
//!
//! ```text
//! doppler secrets download -p <project> -c <kind>_<suffix> --no-file [--format env]
//! ```

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::domain::{BundleKind, ConfigSuffix, SecretsMode};
use crate::error::FetchError;

/// Captured output of one fetch.
#[derive(Debug)]
pub struct FetchOutput {
    /// Raw stdout bytes, decoded when the bundle is parsed.
    pub stdout: Zeroizing<Vec<u8>>,
    pub stderr: String,
    /// Whether the tool exited with status zero.
    pub success: bool,
}

impl FetchOutput {
    /// Output of a clean run with the given stdout.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: Zeroizing::new(stdout.into()),
            stderr: String::new(),
            success: true,
        }
    }
}

/// Something that can fetch a bundle's raw text.
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Fetch the raw output for `kind` under `suffix`.
    async fn fetch(&self, kind: BundleKind, suffix: &ConfigSuffix)
        -> Result<FetchOutput, FetchError>;
}

/// Fetches bundles with the Doppler CLI.
#[derive(Debug, Clone)]
pub struct DopplerCli {
    tool: String,
    project: String,
    mode: SecretsMode,
    timeout: Duration,
}

impl DopplerCli {
    pub fn new(
        tool: impl Into<String>,
        project: impl Into<String>,
        mode: SecretsMode,
        timeout: Duration,
    ) -> Self {
        Self {
            tool: tool.into(),
            project: project.into(),
            mode,
            timeout,
        }
    }

    /// Arguments passed to the tool for one bundle.
    pub fn download_args(&self, kind: BundleKind, suffix: &ConfigSuffix) -> Vec<String> {
        let mut args = vec![
            "secrets".to_string(),
            "download".to_string(),
            "-p".to_string(),
            self.project.clone(),
            "-c".to_string(),
            kind.config_name(suffix.as_str()),
            "--no-file".to_string(),
        ];
        if kind == BundleKind::Secrets && self.mode == SecretsMode::Env {
            args.extend(["--format".to_string(), "env".to_string()]);
        }
        args
    }

    /// Full command line, for log output.
    pub fn command_line(&self, kind: BundleKind, suffix: &ConfigSuffix) -> String {
        let mut parts = vec![self.tool.clone()];
        parts.extend(self.download_args(kind, suffix));
        parts.join(" ")
    }
}

#[async_trait]
impl SecretSource for DopplerCli {
    async fn fetch(
        &self,
        kind: BundleKind,
        suffix: &ConfigSuffix,
    ) -> Result<FetchOutput, FetchError> {
        let program = which::which(&self.tool).map_err(|_| FetchError::ToolNotFound {
            tool: self.tool.clone(),
        })?;

        debug!(bundle = %kind, command = %self.command_line(kind, suffix), "downloading bundle");

        let mut cmd = Command::new(program);
        cmd.args(self.download_args(kind, suffix))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| FetchError::Timeout {
                tool: self.tool.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| FetchError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;

        let stdout = Zeroizing::new(output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        debug!(
            bundle = %kind,
            status = ?output.status.code(),
            bytes = stdout.len(),
            "bundle downloaded"
        );

        Ok(FetchOutput {
            stdout,
            stderr,
            success: output.status.success(),
        })
    }
}
