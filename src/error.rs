//! Application error types using thiserror
//!
//! Error hierarchy:
//! - AppError: fatal errors that end a run, each mapped to an exit code
//! - FetchError: failure to fetch a single file through the contents API
//!
//! A lock file that cannot be fetched is not an `AppError`: the retriever
//! reports it as a `FetchError` inside its result and the run continues.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage errors
pub const EXIT_USAGE: u8 = 2;

/// Exit code for every other fatal error
pub const EXIT_FAILURE: u8 = 1;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// No repository location was given
    #[error("no repository given")]
    Usage,

    /// Location does not look like a GitHub repository URL
    #[error("invalid GitHub repository URL '{location}'")]
    InvalidReference { location: String },

    /// The manifest could not be fetched or cloned
    #[error("failed to retrieve {file}: {message}")]
    Retrieval { file: String, message: String },

    /// The manifest is unreadable after retrieval
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolver failed or its output could not be read
    #[error("module resolution failed: {message}")]
    Resolution { message: String },

    /// The temporary working directory could not be created
    #[error("failed to create working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },

    /// The report could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to fetching a single file from the contents API
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Response had a status other than 200
    #[error("unexpected response from {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON document
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Embedded content was not valid base64
    #[error("failed to decode content of {file}: {message}")]
    Decode { file: String, message: String },

    /// Decoded content could not be written into the working directory
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fetch task panicked or was cancelled
    #[error("fetch task for {file} did not complete: {message}")]
    Task { file: String, message: String },
}

impl AppError {
    /// Creates a new InvalidReference error
    pub fn invalid_reference(location: impl Into<String>) -> Self {
        AppError::InvalidReference {
            location: location.into(),
        }
    }

    /// Creates a new Retrieval error
    pub fn retrieval(file: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Retrieval {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Creates a new ManifestRead error
    pub fn manifest_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::ManifestRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Resolution error
    pub fn resolution(message: impl Into<String>) -> Self {
        AppError::Resolution {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

impl FetchError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Decode error
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Decode {
            file: file.into(),
            message: message.into(),
        }
    }
}
