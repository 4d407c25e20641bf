//! Ephemeral working directory for a single run
//!
//! The directory lives under the system temp area and is removed recursively
//! when the `WorkingDirectory` is dropped, on success and on every error path.

use crate::error::AppError;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name of the manifest
pub const MANIFEST_FILE: &str = "go.mod";

/// File name of the lock file
pub const LOCK_FILE: &str = "go.sum";

const DIR_PREFIX: &str = "repo-";

/// Temporary directory holding go.mod, go.sum and whatever the resolver needs
#[derive(Debug)]
pub struct WorkingDirectory {
    dir: TempDir,
}

impl WorkingDirectory {
    /// Create a fresh directory with a random suffix
    pub fn create() -> Result<Self, AppError> {
        Self::create_in(temp_dir_base())
    }

    /// Create a fresh directory under `base`
    pub fn create_in(base: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = tempfile::Builder::new()
            .prefix(DIR_PREFIX)
            .tempdir_in(base)
            .map_err(|source| AppError::WorkingDirectory { source })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join(MANIFEST_FILE)
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.dir.path().join(LOCK_FILE)
    }
}

/// Parent of every working directory. A relative `TMPDIR` is ignored in
/// favour of the platform default.
fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }
    if cfg!(windows) {
        ["TEMP", "TMP"]
            .into_iter()
            .filter_map(env::var_os)
            .map(PathBuf::from)
            .find(|candidate| candidate.is_absolute())
            .unwrap_or_else(|| PathBuf::from(r"C:\Windows\Temp"))
    } else {
        PathBuf::from("/tmp")
    }
}
