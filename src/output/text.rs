//! Text output formatter for human-readable display
//!
//! Without colors the output is exactly:
//!
//! ```text
//! Module: {module}
//! Go version: {go_version}
//! {path}: {current} -> {available}
//! ```

use crate::domain::{ManifestInfo, ModuleUpdate};
use crate::output::ReportFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter, writes each update as soon as it arrives
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter without colors
    pub fn new() -> Self {
        Self::with_color(false)
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn identity(&mut self, info: &ManifestInfo, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "Module: {}", info.module.bold())?;
            writeln!(writer, "Go version: {}", info.go_version.bold())
        } else {
            writeln!(writer, "Module: {}", info.module)?;
            writeln!(writer, "Go version: {}", info.go_version)
        }
    }

    fn update(&mut self, update: &ModuleUpdate, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "{}: {} {} {}",
                update.path,
                update.current.dimmed(),
                "->".dimmed(),
                update.available.bright_white().bold()
            )
        } else {
            writeln!(
                writer,
                "{}: {} -> {}",
                update.path, update.current, update.available
            )
        }
    }

    fn finish(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(path: &str, current: &str, available: &str) -> ModuleUpdate {
        ModuleUpdate {
            path: path.to_string(),
            current: current.to_string(),
            available: available.to_string(),
            update_path: None,
            released: None,
            indirect: false,
        }
    }

    #[test]
    fn test_identity() {
        let mut formatter = TextFormatter::new();
        let mut out = Vec::new();
        let info = ManifestInfo::parse("module example.com/x\ngo 1.21\n");
        formatter.identity(&info, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Module: example.com/x\nGo version: 1.21\n"
        );
    }

    #[test]
    fn test_identity_empty_fields() {
        let mut formatter = TextFormatter::new();
        let mut out = Vec::new();
        formatter.identity(&ManifestInfo::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Module: \nGo version: \n");
    }

    #[test]
    fn test_update_lines() {
        let mut formatter = TextFormatter::new();
        let mut out = Vec::new();
        formatter
            .update(&update("b", "1.0.0", "1.2.0"), &mut out)
            .unwrap();
        formatter
            .update(&update("golang.org/x/text", "v0.3.7", "v0.14.0"), &mut out)
            .unwrap();
        formatter.finish(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "b: 1.0.0 -> 1.2.0\ngolang.org/x/text: v0.3.7 -> v0.14.0\n"
        );
    }

    #[test]
    fn test_colored_update_keeps_content() {
        let mut formatter = TextFormatter::with_color(true);
        let mut out = Vec::new();
        formatter
            .update(&update("b", "1.0.0", "1.2.0"), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("b: "));
        assert!(text.contains("1.0.0"));
        assert!(text.contains("1.2.0"));
        assert!(text.ends_with('\n'));
    }
}
