//! Module resolver invocation
//!
//! Dependency resolution is delegated to `go list -m -u -json all`, run once
//! with the working directory as its cwd. Its stdout is a stream of
//! concatenated JSON objects, one per module.

use crate::error::AppError;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Default Go binary
pub const DEFAULT_GO_BIN: &str = "go";

/// Arguments requesting every module with update information as JSON
const LIST_ARGS: [&str; 5] = ["list", "-m", "-u", "-json", "all"];

/// Trait for running the external module resolver
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    /// Run the resolver in `dir` and return its raw output stream
    async fn list_modules(&self, dir: &Path) -> Result<Vec<u8>, AppError>;
}

/// Resolver backed by the Go toolchain
#[derive(Debug, Clone)]
pub struct GoListResolver {
    go_bin: String,
}

impl GoListResolver {
    pub fn new(go_bin: impl Into<String>) -> Self {
        Self {
            go_bin: go_bin.into(),
        }
    }

    /// Human-readable command line, for logs and error messages
    pub fn command_line(&self) -> String {
        format!("{} {}", self.go_bin, LIST_ARGS.join(" "))
    }
}

impl Default for GoListResolver {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BIN)
    }
}

#[async_trait]
impl ModuleResolver for GoListResolver {
    async fn list_modules(&self, dir: &Path) -> Result<Vec<u8>, AppError> {
        debug!(cwd = %dir.display(), "running {}", self.command_line());

        let output = Command::new(&self.go_bin)
            .args(LIST_ARGS)
            .current_dir(dir)
            .output()
            .await
            .map_err(|e| {
                AppError::resolution(format!("failed to execute {}: {}", self.command_line(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::resolution(format!(
                "{} exited with {}: {}",
                self.command_line(),
                output.status,
                stderr.trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "resolver output captured");
        Ok(output.stdout)
    }
}
