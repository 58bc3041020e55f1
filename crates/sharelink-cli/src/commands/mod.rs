//! Subcommands of the `sharelink` binary

pub mod annotate;
pub mod resolve;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use sharelink_core::config::RunConfig;
use sharelink_graph::{client::GraphClient, provider::GraphShareProvider};

/// Directory and credential shared by `resolve` and `annotate`
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Directory to scan for OneDrive shared links
    #[arg(long)]
    pub directory: PathBuf,

    /// Microsoft Graph bearer token
    #[arg(long)]
    pub token: String,

    /// Follow symbolic links while walking the directory
    #[arg(long)]
    pub follow_links: bool,
}

impl TargetArgs {
    /// Builds and validates the run configuration
    pub fn run_config(&self, graph_url: &str, dry_run: bool) -> Result<RunConfig> {
        let config = RunConfig::for_directory(&self.directory)
            .with_follow_links(self.follow_links)
            .with_dry_run(dry_run)
            .with_graph_base_url(graph_url);

        let errors = config.validate();
        if !errors.is_empty() {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            bail!("Invalid configuration: {}", details.join("; "));
        }
        Ok(config)
    }

    /// Creates the Graph-backed provider for this run
    pub fn provider(&self, config: &RunConfig) -> GraphShareProvider {
        GraphShareProvider::new(GraphClient::with_base_url(
            &self.token,
            &config.graph.base_url,
        ))
    }
}
