//! Annotate command - embed resolved drive paths into shared links
//!
//! Provides the `sharelink annotate` CLI command which:
//! 1. Walks the directory and collects every `1drv.ms/i/` identifier
//! 2. Resolves each one through Microsoft Graph
//! 3. Appends `#<drive path>` to every quoted link that has no fragment yet
//!    and writes back the files that changed

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use sharelink_core::usecases::AnnotateLinksUseCase;
use tracing::info;

use super::TargetArgs;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl AnnotateCommand {
    pub async fn execute(&self, format: OutputFormat, graph_url: &str) -> Result<()> {
        let fmt = get_formatter(format);
        let config = self.target.run_config(graph_url, self.dry_run)?;

        if config.rewrite.dry_run {
            fmt.notice("Dry run mode - no files will be written");
        }
        info!(
            directory = %config.scan.root.display(),
            dry_run = config.rewrite.dry_run,
            "Annotating shared links"
        );

        let use_case = AnnotateLinksUseCase::new(Arc::new(self.target.provider(&config)));
        let report = use_case
            .annotate(&config)
            .await
            .context("Failed to scan directory")?;

        fmt.report(&report);
        Ok(())
    }
}
