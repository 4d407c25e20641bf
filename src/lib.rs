//! dep-analyzer - report outdated dependencies of a remote Go module
//!
//! This library provides the pipeline behind the CLI:
//! - Retrieval of go.mod/go.sum (GitHub contents API or git clone)
//! - go.mod identity parsing
//! - `go list -m -u -json all` invocation
//! - Streaming decode of the resolver output into an update report

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod report;
pub mod resolver;
pub mod retriever;
pub mod workdir;
