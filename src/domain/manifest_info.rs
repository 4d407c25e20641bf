//! Module identity read from go.mod

use crate::error::AppError;
use std::path::Path;

const MODULE_PREFIX: &str = "module ";
const GO_PREFIX: &str = "go ";

/// Identity declared by a go.mod file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Module path from the `module` directive (empty if absent)
    pub module: String,
    /// Minimum Go version from the `go` directive (empty if absent)
    pub go_version: String,
}

impl ManifestInfo {
    /// Scan go.mod text for the `module` and `go` directives.
    ///
    /// The last occurrence of a directive wins. Missing directives leave the
    /// field empty.
    pub fn parse(content: &str) -> Self {
        let mut info = Self::default();

        for line in content.split('\n') {
            if let Some(rest) = line.strip_prefix(MODULE_PREFIX) {
                info.module = rest.trim().to_string();
            }
            if let Some(rest) = line.strip_prefix(GO_PREFIX) {
                info.go_version = rest.trim().to_string();
            }
        }

        info
    }

    /// Read and parse the manifest at `path`
    pub async fn read(path: &Path) -> Result<Self, AppError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::manifest_read(path, e))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_and_go() {
        let info = ManifestInfo::parse("module example.com/x\n\ngo 1.21\n");
        assert_eq!(info.module, "example.com/x");
        assert_eq!(info.go_version, "1.21");
    }

    #[test]
    fn test_parse_order_independent() {
        let info = ManifestInfo::parse("go 1.22\nmodule example.com/y\n");
        assert_eq!(info.module, "example.com/y");
        assert_eq!(info.go_version, "1.22");
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let info = ManifestInfo::parse("module first\ngo 1.20\nmodule second\ngo 1.21\n");
        assert_eq!(info.module, "second");
        assert_eq!(info.go_version, "1.21");
    }

    #[test]
    fn test_parse_missing_directives() {
        let info = ManifestInfo::parse("require github.com/a/b v1.0.0\n");
        assert_eq!(info, ManifestInfo::default());
    }

    #[test]
    fn test_parse_trims_whitespace_and_crlf() {
        let info = ManifestInfo::parse("module   example.com/z  \r\ngo 1.21.5\r\n");
        assert_eq!(info.module, "example.com/z");
        assert_eq!(info.go_version, "1.21.5");
    }

    #[test]
    fn test_parse_ignores_indented_and_similar_lines() {
        let content = r#"module example.com/real

go 1.21

toolchain go1.22.0

require (
    golang.org/x/text v0.14.0
)
"#;
        let info = ManifestInfo::parse(content);
        assert_eq!(info.module, "example.com/real");
        assert_eq!(info.go_version, "1.21");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ManifestInfo::read(&dir.path().join("go.mod")).await;
        assert!(matches!(result, Err(AppError::ManifestRead { .. })));
    }

    #[tokio::test]
    async fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("go.mod");
        std::fs::write(&path, "module example.com/x\ngo 1.21\n").unwrap();

        let info = ManifestInfo::read(&path).await.unwrap();
        assert_eq!(info.module, "example.com/x");
        assert_eq!(info.go_version, "1.21");
    }
}
