//! Manifest retrievers
//!
//! This module provides two interchangeable ways to populate a working
//! directory with go.mod and, when available, go.sum:
//! - GitHub contents API fetch of just those two files
//! - Full `git clone` of the repository

mod client;
mod clone;
mod github;

pub use client::HttpClient;
pub use clone::GitCloneRetriever;
pub use github::{GitHubRetriever, DEFAULT_API_BASE};

use crate::config::{RunConfig, Strategy};
use crate::error::AppError;
use crate::workdir::WorkingDirectory;
use async_trait::async_trait;

/// State of the optional lock file after retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockFileStatus {
    /// go.sum was written into the working directory
    Present,
    /// go.sum is absent; the reason is reported as a warning
    Missing(String),
}

/// Outcome of a successful retrieval; go.mod is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retrieval {
    pub lock_file: LockFileStatus,
}

impl Retrieval {
    pub fn with_lock_file() -> Self {
        Self {
            lock_file: LockFileStatus::Present,
        }
    }

    pub fn without_lock_file(reason: impl Into<String>) -> Self {
        Self {
            lock_file: LockFileStatus::Missing(reason.into()),
        }
    }
}

/// Trait for manifest retrievers
#[async_trait]
pub trait ManifestRetriever: Send + Sync {
    /// Short name of the strategy, for logs and progress
    fn strategy(&self) -> Strategy;

    /// Populate `workdir` with go.mod and, if available, go.sum.
    ///
    /// Failing to obtain go.mod is an error; failing to obtain go.sum is
    /// reported through [`LockFileStatus::Missing`].
    async fn retrieve(&self, workdir: &WorkingDirectory) -> Result<Retrieval, AppError>;
}

/// Create the retriever selected by the configuration
pub fn create_retriever(config: &RunConfig) -> Result<Box<dyn ManifestRetriever>, AppError> {
    match config.strategy {
        Strategy::Fetch => {
            let client = HttpClient::with_token(config.token.as_deref())?;
            Ok(Box::new(GitHubRetriever::new(
                &config.location,
                &config.api_base,
                client,
            )?))
        }
        Strategy::Clone => Ok(Box::new(GitCloneRetriever::new(&config.location))),
    }
}
