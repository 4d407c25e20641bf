//! GitHub contents API retriever
//!
//! Fetches go.mod and go.sum concurrently from
//! `{api}/repos/{owner}/{repo}/contents/{file}`. Each response carries the
//! file as base64 in its `content` field.

use crate::config::Strategy;
use crate::domain::RepositoryReference;
use crate::error::{AppError, FetchError};
use crate::retriever::{HttpClient, ManifestRetriever, Retrieval};
use crate::workdir::{WorkingDirectory, LOCK_FILE, MANIFEST_FILE};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Public GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Retriever that downloads only the manifest files
pub struct GitHubRetriever {
    reference: RepositoryReference,
    api_base: String,
    client: HttpClient,
}

/// Contents API response
#[derive(Debug, Deserialize)]
struct ContentResponse {
    /// File content, base64 with embedded line breaks
    content: String,
}

impl GitHubRetriever {
    /// Create a retriever for `location`.
    ///
    /// Fails with `InvalidReference` if `location` is not a GitHub repository
    /// URL, before any request is made.
    pub fn new(location: &str, api_base: &str, client: HttpClient) -> Result<Self, AppError> {
        let reference = RepositoryReference::parse(location)?;
        Ok(Self {
            reference,
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn reference(&self) -> &RepositoryReference {
        &self.reference
    }

    /// Spawn a task that fetches `file` and writes it to `dest`
    fn spawn_fetch(
        &self,
        file: &'static str,
        dest: PathBuf,
    ) -> tokio::task::JoinHandle<Result<(), FetchError>> {
        let client = self.client.clone();
        let url = self.reference.contents_url(&self.api_base, file);
        tokio::spawn(async move { fetch_file(&client, &url, file, dest).await })
    }
}

async fn fetch_file(
    client: &HttpClient,
    url: &str,
    file: &str,
    dest: PathBuf,
) -> Result<(), FetchError> {
    debug!(url, "fetching {}", file);
    let response: ContentResponse = client.get_json(url).await?;
    let bytes = decode_content(file, &response.content)?;
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|source| FetchError::Write { path: dest, source })?;
    debug!(bytes = bytes.len(), "wrote {}", file);
    Ok(())
}

/// Decode the `content` field; GitHub wraps the base64 text at 60 columns
fn decode_content(file: &str, content: &str) -> Result<Vec<u8>, FetchError> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| FetchError::decode(file, e.to_string()))
}

fn join_outcome(
    file: &str,
    joined: Result<Result<(), FetchError>, tokio::task::JoinError>,
) -> Result<(), FetchError> {
    joined.unwrap_or_else(|e| {
        Err(FetchError::Task {
            file: file.to_string(),
            message: e.to_string(),
        })
    })
}

#[async_trait]
impl ManifestRetriever for GitHubRetriever {
    fn strategy(&self) -> Strategy {
        Strategy::Fetch
    }

    async fn retrieve(&self, workdir: &WorkingDirectory) -> Result<Retrieval, AppError> {
        debug!(repository = %self.reference, "fetching manifest through contents API");

        // Disjoint destination files, so the two tasks need no coordination
        let manifest = self.spawn_fetch(MANIFEST_FILE, workdir.manifest_path());
        let lock_file = self.spawn_fetch(LOCK_FILE, workdir.lock_file_path());
        let (manifest, lock_file) = tokio::join!(manifest, lock_file);

        join_outcome(MANIFEST_FILE, manifest)
            .map_err(|e| AppError::retrieval(MANIFEST_FILE, e.to_string()))?;

        Ok(match join_outcome(LOCK_FILE, lock_file) {
            Ok(()) => Retrieval::with_lock_file(),
            Err(e) => Retrieval::without_lock_file(e.to_string()),
        })
    }
}
