//! JSON output formatter for machine processing
//!
//! Updates are buffered and written as a single document on `finish`.

use crate::domain::{ManifestInfo, ModuleUpdate};
use crate::output::ReportFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter {
    output: JsonOutput,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }
}

/// JSON representation of the full report
#[derive(Serialize, Default)]
struct JsonOutput {
    /// Module path from go.mod
    module: String,
    /// Go version from go.mod
    go_version: String,
    /// Available updates in resolver order
    updates: Vec<JsonUpdate>,
}

/// JSON representation of a single update
#[derive(Serialize)]
struct JsonUpdate {
    path: String,
    current: String,
    available: String,
    /// major / minor / patch / unknown
    change: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    released: Option<DateTime<Utc>>,
    indirect: bool,
}

impl From<&ModuleUpdate> for JsonUpdate {
    fn from(update: &ModuleUpdate) -> Self {
        Self {
            path: update.path.clone(),
            current: update.current.clone(),
            available: update.available.clone(),
            change: update.change_kind().to_string(),
            update_path: update.update_path.clone(),
            released: update.released,
            indirect: update.indirect,
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn identity(&mut self, info: &ManifestInfo, _writer: &mut dyn Write) -> std::io::Result<()> {
        self.output.module = info.module.clone();
        self.output.go_version = info.go_version.clone();
        Ok(())
    }

    fn update(&mut self, update: &ModuleUpdate, _writer: &mut dyn Write) -> std::io::Result<()> {
        self.output.updates.push(JsonUpdate::from(update));
        Ok(())
    }

    fn finish(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.output)?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    fn render(updates: &[ModuleUpdate]) -> Value {
        let mut formatter = JsonFormatter::new();
        let mut out = Vec::new();
        let info = ManifestInfo::parse("module example.com/x\ngo 1.21\n");
        formatter.identity(&info, &mut out).unwrap();
        for update in updates {
            formatter.update(update, &mut out).unwrap();
        }
        assert!(out.is_empty());
        formatter.finish(&mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let value = render(&[]);
        assert_eq!(value["module"], "example.com/x");
        assert_eq!(value["go_version"], "1.21");
        assert_eq!(value["updates"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_update_fields() {
        let value = render(&[ModuleUpdate {
            path: "old/mod".to_string(),
            current: "v1.2.0".to_string(),
            available: "v2.0.0".to_string(),
            update_path: Some("new/mod".to_string()),
            released: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            indirect: true,
        }]);

        let update = &value["updates"][0];
        assert_eq!(update["path"], "old/mod");
        assert_eq!(update["current"], "v1.2.0");
        assert_eq!(update["available"], "v2.0.0");
        assert_eq!(update["change"], "major");
        assert_eq!(update["update_path"], "new/mod");
        assert_eq!(update["released"], "2024-01-02T03:04:05Z");
        assert_eq!(update["indirect"], true);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let value = render(&[ModuleUpdate {
            path: "b".to_string(),
            current: "1.0.0".to_string(),
            available: "1.2.0".to_string(),
            update_path: None,
            released: None,
            indirect: false,
        }]);

        let update = value["updates"][0].as_object().unwrap();
        assert!(!update.contains_key("update_path"));
        assert!(!update.contains_key("released"));
        assert_eq!(update["change"], "minor");
    }

    #[test]
    fn test_order_preserved() {
        let make = |path: &str| ModuleUpdate {
            path: path.to_string(),
            current: "v1.0.0".to_string(),
            available: "v1.0.1".to_string(),
            update_path: None,
            released: None,
            indirect: false,
        };
        let value = render(&[make("z"), make("a"), make("m")]);
        let paths: Vec<_> = value["updates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(paths, vec!["z", "a", "m"]);
    }
}
