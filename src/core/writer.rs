//! Idempotent script writer.
//!
//! A target is only rewritten when its bytes differ from the rendered
//! content, so shells and file watchers don't see spurious changes.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::domain::{OutputTarget, WriteOutcome};
use crate::error::WriteError;

/// Whether `target` already holds exactly `content`.
///
/// # Errors
///
/// Returns `WriteError::Read` if the file exists but cannot be read.
pub async fn is_current(target: &OutputTarget, content: &str) -> Result<bool, WriteError> {
    let path = target.path();
    let read_err = |source| WriteError::Read {
        path: path.clone(),
        source,
    };

    if !tokio::fs::try_exists(&path).await.map_err(read_err)? {
        return Ok(false);
    }

    let existing = tokio::fs::read(&path).await.map_err(read_err)?;
    Ok(existing == content.as_bytes())
}

/// Write `content` to `target` unless it is already there.
///
/// The output directory is created when missing. Content goes to a temp
/// file next to the target and is renamed into place, so an interrupted
/// run never leaves a truncated script behind. An existing file keeps its
/// permissions; with `private` set, a new file gets mode 0600 on Unix.
pub async fn write(target: &OutputTarget, content: &str, private: bool) -> WriteOutcome {
    let path = target.path();

    if let Err(source) = tokio::fs::create_dir_all(target.dir()).await {
        return WriteOutcome::Failed(WriteError::CreateDir {
            path: target.dir().to_path_buf(),
            source,
        });
    }

    match is_current(target, content).await {
        Ok(true) => {
            debug!(path = %path.display(), "content unchanged, skipping write");
            return WriteOutcome::Unchanged;
        }
        Ok(false) => {}
        Err(e) => return WriteOutcome::Failed(e),
    }

    let temp = temp_path(&path);
    if let Err(source) = replace(&temp, &path, content, private).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return WriteOutcome::Failed(WriteError::Write { path, source });
    }

    let actual = match tokio::fs::metadata(&path).await {
        Ok(meta) => meta.len() as usize,
        Err(source) => return WriteOutcome::Failed(WriteError::Read { path, source }),
    };
    if actual != content.len() {
        return WriteOutcome::Failed(WriteError::Short {
            path,
            expected: content.len(),
            actual,
        });
    }

    debug!(path = %path.display(), bytes = actual, "wrote file");
    WriteOutcome::Written(actual)
}

/// Hidden sibling of `path` used while writing.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

async fn replace(temp: &Path, path: &Path, content: &str, private: bool) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    if private {
        options.mode(0o600);
    }
    #[cfg(not(unix))]
    let _ = private;

    let mut file = options.open(temp).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    if let Ok(existing) = tokio::fs::metadata(path).await {
        tokio::fs::set_permissions(temp, existing.permissions()).await?;
    }

    tokio::fs::rename(temp, path).await
}
