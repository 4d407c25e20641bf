//! Run configuration assembled from CLI arguments and environment

use crate::cli::CliArgs;
use crate::error::AppError;
use crate::output::OutputConfig;
use crate::report::UpdateFilter;
use crate::resolver::DEFAULT_GO_BIN;
use crate::retriever::DEFAULT_API_BASE;
use clap::ValueEnum;
use std::fmt;
use std::io::IsTerminal;

/// How go.mod and go.sum are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Download just the two files through the GitHub contents API
    #[default]
    Fetch,
    /// Clone the whole repository with git
    Clone,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Fetch => f.write_str("fetch"),
            Strategy::Clone => f.write_str("clone"),
        }
    }
}

/// Everything a run needs to know
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository location as given by the user
    pub location: String,
    pub strategy: Strategy,
    /// GitHub API base URL (fetch strategy)
    pub api_base: String,
    /// GitHub token (fetch strategy)
    pub token: Option<String>,
    /// Go binary for module resolution
    pub go_bin: String,
    pub filter: UpdateFilter,
    pub output: OutputConfig,
    /// Whether to show the progress spinner
    pub progress: bool,
}

impl RunConfig {
    /// Build the configuration; a missing or blank repository is a usage error
    pub fn from_cli(args: CliArgs) -> Result<Self, AppError> {
        let location = args
            .repo
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or(AppError::Usage)?;

        let progress = !args.quiet && !args.json && std::io::stderr().is_terminal();

        Ok(Self {
            location,
            strategy: args.strategy,
            api_base: args
                .api_url
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            token: args.token.filter(|t| !t.is_empty()),
            go_bin: args.go_bin.unwrap_or_else(|| DEFAULT_GO_BIN.to_string()),
            filter: UpdateFilter::new(args.direct),
            output: OutputConfig::from_cli(args.json),
            progress,
        })
    }
}
