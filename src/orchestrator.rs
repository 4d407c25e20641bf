//! Orchestrator for coordinating a run
//!
//! Workflow: create working directory → retrieve go.mod/go.sum → print
//! identity → run resolver → print updates. The working directory is removed
//! when the run returns, whatever the outcome.

use crate::config::RunConfig;
use crate::domain::ManifestInfo;
use crate::error::AppError;
use crate::output::{create_formatter, OutputConfig};
use crate::progress::Progress;
use crate::report::{updates, UpdateFilter};
use crate::resolver::{GoListResolver, ModuleResolver};
use crate::retriever::{create_retriever, LockFileStatus, ManifestRetriever};
use crate::workdir::{WorkingDirectory, LOCK_FILE};
use std::io::Write;
use tracing::{debug, warn};

/// Orchestrator for coordinating the analysis workflow
pub struct Orchestrator {
    retriever: Box<dyn ManifestRetriever>,
    resolver: Box<dyn ModuleResolver>,
    filter: UpdateFilter,
    output: OutputConfig,
    show_progress: bool,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Identity read from go.mod
    pub manifest: ManifestInfo,
    /// Whether go.sum was available to the resolver
    pub lock_file: LockFileStatus,
    /// Number of updates reported
    pub updates: usize,
}

impl Orchestrator {
    /// Create an orchestrator from the run configuration.
    ///
    /// Fails early, before anything touches the network or filesystem, if the
    /// repository location is invalid for the selected strategy.
    pub fn new(config: &RunConfig) -> Result<Self, AppError> {
        let retriever = create_retriever(config)?;
        Ok(Self {
            retriever,
            resolver: Box::new(GoListResolver::new(config.go_bin.clone())),
            filter: config.filter,
            output: config.output.clone(),
            show_progress: config.progress,
        })
    }

    /// Create an orchestrator from explicit parts (for testing)
    pub fn with_parts(
        retriever: Box<dyn ManifestRetriever>,
        resolver: Box<dyn ModuleResolver>,
        filter: UpdateFilter,
        output: OutputConfig,
    ) -> Self {
        Self {
            retriever,
            resolver,
            filter,
            output,
            show_progress: false,
        }
    }

    /// Run the workflow in a fresh working directory, writing the report to `writer`
    pub async fn run(&self, writer: &mut dyn Write) -> Result<RunSummary, AppError> {
        let workdir = WorkingDirectory::create()?;
        debug!(workdir = %workdir.path().display(), "created working directory");
        self.run_in(&workdir, writer).await
    }

    /// Run the workflow in an existing working directory
    pub async fn run_in(
        &self,
        workdir: &WorkingDirectory,
        writer: &mut dyn Write,
    ) -> Result<RunSummary, AppError> {
        let mut progress = Progress::new(self.show_progress);
        let mut formatter = create_formatter(&self.output);

        // Step 1: Populate the working directory
        progress.spinner(&format!(
            "Retrieving go.mod ({})...",
            self.retriever.strategy()
        ));
        let retrieval = self.retriever.retrieve(workdir).await?;
        progress.finish_and_clear();

        if let LockFileStatus::Missing(ref reason) = retrieval.lock_file {
            warn!("{} not available, continuing without it: {}", LOCK_FILE, reason);
        }

        // Step 2: Identity
        let manifest = ManifestInfo::read(&workdir.manifest_path()).await?;
        formatter.identity(&manifest, writer)?;
        writer.flush()?;

        // Step 3: Resolve
        progress.spinner("Resolving modules...");
        let stream = self.resolver.list_modules(workdir.path()).await?;
        progress.finish_and_clear();

        // Step 4: Report
        let mut count = 0;
        for update in updates(&stream, self.filter) {
            formatter.update(&update, writer)?;
            count += 1;
        }
        formatter.finish(writer)?;
        debug!(updates = count, "report complete");

        Ok(RunSummary {
            manifest,
            lock_file: retrieval.lock_file,
            updates: count,
        })
    }
}
