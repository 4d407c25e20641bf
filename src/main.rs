//! dep-analyzer - report outdated dependencies of a remote Go module
//!
//! Usage: dep-analyzer -repo=https://github.com/owner/repo

use colored::Colorize;
use dep_analyzer::cli::CliArgs;
use dep_analyzer::config::RunConfig;
use dep_analyzer::error::AppError;
use dep_analyzer::logging;
use dep_analyzer::orchestrator::Orchestrator;
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse_normalized(std::env::args_os());

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    // Run the main logic and map errors to exit codes
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            if matches!(e, AppError::Usage) {
                eprintln!("{}", CliArgs::usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> Result<(), AppError> {
    let config = RunConfig::from_cli(args)?;
    let orchestrator = Orchestrator::new(&config)?;

    let mut stdout = io::stdout().lock();
    orchestrator.run(&mut stdout).await?;
    Ok(())
}
