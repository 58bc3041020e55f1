//! Whoami command - show who a bearer token belongs to

use anyhow::{bail, Context, Result};
use clap::Args;
use sharelink_core::{config::validate_base_url, ports::IProfileProvider};
use sharelink_graph::{client::GraphClient, provider::GraphShareProvider};

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct WhoamiCommand {
    /// Microsoft Graph bearer token
    #[arg(long)]
    pub token: String,
}

impl WhoamiCommand {
    pub async fn execute(&self, format: OutputFormat, graph_url: &str) -> Result<()> {
        let fmt = get_formatter(format);

        if let Some(err) = validate_base_url(graph_url) {
            bail!("Invalid configuration: {err}");
        }

        let provider = GraphShareProvider::new(GraphClient::with_base_url(&self.token, graph_url));
        let user_info = provider
            .get_user_info()
            .await
            .context("Failed to retrieve user info from Graph API")?;

        fmt.profile(&user_info);
        Ok(())
    }
}
