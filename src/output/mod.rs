//! Output formatting for the update report
//!
//! This module provides:
//! - Text output, one `path: current -> available` line per update
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{ManifestInfo, ModuleUpdate};
use std::io::{IsTerminal, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Whether to use colors (text output only)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: false,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Create configuration from CLI arguments.
    ///
    /// Colors are used only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn from_cli(json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

        Self { format, color }
    }
}

/// Trait for report formatters.
///
/// Calls arrive in order: `identity` once, `update` for each update as it is
/// decoded, then `finish`.
pub trait ReportFormatter {
    /// Write the module identity
    fn identity(&mut self, info: &ManifestInfo, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Write a single available update
    fn update(&mut self, update: &ModuleUpdate, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Flush anything buffered
    fn finish(&mut self, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a report formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn ReportFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_config_from_cli_text() {
        let config = OutputConfig::from_cli(false);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_create_formatter_text() {
        let mut formatter = create_formatter(&OutputConfig::default());
        let mut out = Vec::new();
        formatter
            .identity(&ManifestInfo::parse("module m\ngo 1.21\n"), &mut out)
            .unwrap();
        formatter.finish(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Module: m\nGo version: 1.21\n");
    }

    #[test]
    fn test_create_formatter_json() {
        let mut formatter = create_formatter(&OutputConfig::new(OutputFormat::Json, false));
        let mut out = Vec::new();
        formatter.identity(&ManifestInfo::default(), &mut out).unwrap();
        assert!(out.is_empty());
        formatter.finish(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["updates"], serde_json::json!([]));
    }
}
