//! Full clone retriever
//!
//! Runs `git clone <location> <workdir>` and checks that go.mod landed at the
//! root of the clone.

use crate::config::Strategy;
use crate::error::AppError;
use crate::retriever::{ManifestRetriever, Retrieval};
use crate::workdir::{WorkingDirectory, LOCK_FILE, MANIFEST_FILE};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

const GIT: &str = "git";

/// Retriever that clones the whole repository
pub struct GitCloneRetriever {
    location: String,
}

impl GitCloneRetriever {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }
}

#[async_trait]
impl ManifestRetriever for GitCloneRetriever {
    fn strategy(&self) -> Strategy {
        Strategy::Clone
    }

    async fn retrieve(&self, workdir: &WorkingDirectory) -> Result<Retrieval, AppError> {
        debug!(location = %self.location, dest = %workdir.path().display(), "git clone");

        let output = Command::new(GIT)
            .arg("clone")
            .arg("--quiet")
            .arg("--")
            .arg(&self.location)
            .arg(workdir.path())
            .output()
            .await
            .map_err(|e| {
                AppError::retrieval(MANIFEST_FILE, format!("failed to execute git: {}", e))
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(AppError::retrieval(
                MANIFEST_FILE,
                format!("git clone failed ({}): {}", output.status, combined.trim()),
            ));
        }

        if !tokio::fs::try_exists(workdir.manifest_path())
            .await
            .unwrap_or(false)
        {
            return Err(AppError::retrieval(
                MANIFEST_FILE,
                "not found at the repository root",
            ));
        }

        if tokio::fs::try_exists(workdir.lock_file_path())
            .await
            .unwrap_or(false)
        {
            Ok(Retrieval::with_lock_file())
        } else {
            Ok(Retrieval::without_lock_file(format!(
                "{} not found at the repository root",
                LOCK_FILE
            )))
        }
    }
}
