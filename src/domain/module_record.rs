//! Records emitted by `go list -m -u -json` and the updates derived from them

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ChangeKind;

/// One module entry emitted by `go list -m -u -json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModuleRecord {
    pub path: String,
    pub version: String,
    /// Release time of the resolved version (RFC 3339)
    pub time: Option<String>,
    /// Set on the main module
    pub main: bool,
    /// Set on modules not required directly by the main module
    pub indirect: bool,
    pub update: Option<UpdateInfo>,
    pub error: Option<ModuleError>,
}

/// Newer version reported for a module
///
/// `path` is only present when the update lives under a different module path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateInfo {
    pub path: Option<String>,
    pub version: String,
    pub time: Option<String>,
}

/// Per-module error reported by the resolver
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModuleError {
    pub err: String,
}

/// A dependency with a newer version available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleUpdate {
    pub path: String,
    pub current: String,
    pub available: String,
    /// Module path of the update when it differs from `path`
    pub update_path: Option<String>,
    pub released: Option<DateTime<Utc>>,
    pub indirect: bool,
}

impl ModuleRecord {
    /// Build the report row for this record, if it carries an update
    pub fn to_update(&self) -> Option<ModuleUpdate> {
        let update = self.update.as_ref()?;

        let update_path = update
            .path
            .as_ref()
            .filter(|p| !p.is_empty() && **p != self.path)
            .cloned();

        let released = update
            .time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc));

        Some(ModuleUpdate {
            path: self.path.clone(),
            current: self.version.clone(),
            available: update.version.clone(),
            update_path,
            released,
            indirect: self.indirect,
        })
    }
}

impl ModuleUpdate {
    pub fn change_kind(&self) -> ChangeKind {
        ChangeKind::between(&self.current, &self.available)
    }
}
