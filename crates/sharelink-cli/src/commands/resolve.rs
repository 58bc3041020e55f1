//! Resolve command - print the drive path behind every shared link
//!
//! Provides the `sharelink resolve` CLI command which:
//! 1. Walks the directory and collects every `1drv.ms/i/` identifier
//! 2. Resolves each one through Microsoft Graph
//! 3. Prints `id -> path` for each, leaving every file untouched

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use sharelink_core::usecases::AnnotateLinksUseCase;
use tracing::info;

use super::TargetArgs;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl ResolveCommand {
    pub async fn execute(&self, format: OutputFormat, graph_url: &str) -> Result<()> {
        let fmt = get_formatter(format);
        let config = self.target.run_config(graph_url, false)?;

        info!(directory = %config.scan.root.display(), "Resolving shared links");

        let use_case = AnnotateLinksUseCase::new(Arc::new(self.target.provider(&config)));
        let report = use_case
            .resolve(&config)
            .await
            .context("Failed to scan directory")?;

        fmt.report(&report);
        Ok(())
    }
}
