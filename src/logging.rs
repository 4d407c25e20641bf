//! Logging setup
//!
//! Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides
//! the default level.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: warnings only
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "warn,dep_analyzer=debug";

/// Initialize a tracing subscriber writing compact lines to stderr.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .without_time()
        .compact();

    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // Only the first init in a process succeeds
        let _ = init(true);
        assert!(init(false).is_err());

        debug!("debug message");
        warn!("warning message");
    }
}
