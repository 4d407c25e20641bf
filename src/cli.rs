//! CLI argument parsing module for dep-analyzer

use crate::config::Strategy;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Report outdated dependencies of a remote Go module
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dep-analyzer",
    version,
    about = "Report outdated dependencies of a remote Go module",
    override_usage = "dep-analyzer -repo=<git-url>"
)]
pub struct CliArgs {
    /// Git repository URL to analyze (e.g. https://github.com/owner/repo)
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// How to obtain go.mod/go.sum: GitHub contents API or full git clone
    #[arg(long, value_enum, default_value_t = Strategy::Fetch, env = "DEP_ANALYZER_STRATEGY")]
    pub strategy: Strategy,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, value_name = "URL", env = "DEP_ANALYZER_API_URL")]
    pub api_url: Option<String>,

    /// GitHub token used for contents API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Go binary used to resolve modules
    #[arg(long, value_name = "PATH", env = "DEP_ANALYZER_GO")]
    pub go_bin: Option<String>,

    /// Report only modules required directly by the main module
    #[arg(long)]
    pub direct: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse arguments, accepting Go-style single-dash long options
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Usage line printed when no repository is given
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Rewrite `-repo=x` / `-repo x` style options to `--repo=x` / `--repo x`.
///
/// Only names of known long options are rewritten, so short flags like `-q`
/// keep working. Everything after `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = CliArgs::command();
    let long_names: Vec<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(str::to_string))
        .chain(["help".to_string(), "version".to_string()])
        .collect();

    let mut passthrough = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if long_names.iter().any(|long| long == name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["dep-analyzer"]);
        assert!(args.repo.is_none());
        assert!(!args.direct);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_go_style_repo_flag() {
        let args =
            CliArgs::parse_normalized(["dep-analyzer", "-repo=https://github.com/gin-gonic/gin"]);
        assert_eq!(args.repo.as_deref(), Some("https://github.com/gin-gonic/gin"));
    }

    #[test]
    fn test_go_style_repo_flag_separate_value() {
        let args =
            CliArgs::parse_normalized(["dep-analyzer", "-repo", "https://github.com/a/b"]);
        assert_eq!(args.repo.as_deref(), Some("https://github.com/a/b"));
    }

    #[test]
    fn test_double_dash_repo_flag() {
        let args = CliArgs::parse_normalized(["dep-analyzer", "--repo", "https://github.com/a/b"]);
        assert_eq!(args.repo.as_deref(), Some("https://github.com/a/b"));
    }

    #[test]
    fn test_strategy_flag() {
        let args = CliArgs::parse_normalized([
            "dep-analyzer",
            "-repo=https://github.com/a/b",
            "-strategy=clone",
        ]);
        assert_eq!(args.strategy, Strategy::Clone);
    }

    #[test]
    fn test_short_quiet_flag_untouched() {
        let args = CliArgs::parse_normalized(["dep-analyzer", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_normalize_args() {
        let normalized = normalize_args([
            "dep-analyzer",
            "-repo=x",
            "-json",
            "-q",
            "-unknown",
            "--direct",
            "--",
            "-repo",
        ]);
        assert_eq!(
            normalized,
            vec![
                "dep-analyzer",
                "--repo=x",
                "--json",
                "-q",
                "-unknown",
                "--direct",
                "--",
                "-repo",
            ]
        );
    }

    #[test]
    fn test_usage_mentions_repo() {
        assert!(CliArgs::usage().contains("-repo=<git-url>"));
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_normalized([
            "dep-analyzer",
            "--repo",
            "https://github.com/a/b",
            "--direct",
            "--json",
            "--verbose",
            "--go-bin",
            "/opt/go/bin/go",
            "--api-url",
            "https://ghe.example.com/api/v3",
        ]);
        assert!(args.direct);
        assert!(args.json);
        assert!(args.verbose);
        assert_eq!(args.go_bin.as_deref(), Some("/opt/go/bin/go"));
        assert_eq!(args.api_url.as_deref(), Some("https://ghe.example.com/api/v3"));
    }
}
