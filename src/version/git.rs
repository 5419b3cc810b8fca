//! Git-backed version provider.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tokio::time;

use super::VersionProvider;

/// Ways the `git describe` query can fail. All of them degrade to a blank
/// version field at the rendering layer.
#[derive(Debug, Error)]
pub enum VersionLookupError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git describe exited with {0}")]
    Failed(std::process::ExitStatus),
    #[error("git describe produced non-UTF-8 output")]
    Encoding,
    #[error("git describe timed out after {0:?}")]
    Timeout(Duration),
}

/// Reads the most recent release tag from a local git checkout of the
/// blocking software via `git describe --tags --abbrev=0`.
///
/// The command runs with fixed arguments; no request data ever reaches it.
/// The subprocess is bounded by a timeout and killed when it expires, so a
/// wedged git cannot stall the response.
pub struct GitVersionProvider {
    repo_dir: PathBuf,
    timeout: Duration,
}

impl GitVersionProvider {
    pub fn new(repo_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            timeout,
        }
    }

    async fn describe(&self) -> Result<String, VersionLookupError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_dir)
            .args(["describe", "--tags", "--abbrev=0"])
            .kill_on_drop(true)
            .output();

        let output = time::timeout(self.timeout, output)
            .await
            .map_err(|_| VersionLookupError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(VersionLookupError::Failed(output.status));
        }

        let tag = String::from_utf8(output.stdout).map_err(|_| VersionLookupError::Encoding)?;

        Ok(tag.trim().to_string())
    }
}

#[async_trait]
impl VersionProvider for GitVersionProvider {
    async fn current_version(&self) -> Option<String> {
        match self.describe().await {
            Ok(tag) if tag.is_empty() => None,
            Ok(tag) => Some(tag),
            Err(e) => {
                tracing::warn!(error = %e, repo = %self.repo_dir.display(), "version lookup failed");
                None
            }
        }
    }
}
