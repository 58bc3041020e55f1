//! sharelink CLI - Command-line interface for sharelink
//!
//! Provides commands for:
//! - Resolving the OneDrive shared links found under a directory
//! - Embedding the resolved paths into the files as URL fragments
//! - Checking which account a bearer token belongs to

use clap::{Parser, Subcommand};
use sharelink_core::config::DEFAULT_GRAPH_BASE_URL;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{annotate::AnnotateCommand, resolve::ResolveCommand, whoami::WhoamiCommand};
use output::{get_formatter, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "sharelink",
    version,
    about = "Resolve OneDrive shared image links and embed their drive paths"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Microsoft Graph base URL
    #[arg(long, global = true, default_value = DEFAULT_GRAPH_BASE_URL)]
    graph_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve every shared link under a directory and print its drive path
    Resolve(ResolveCommand),
    /// Append the resolved drive path to every shared link under a directory
    Annotate(AnnotateCommand),
    /// Print the name of the account the token belongs to
    Whoami(WhoamiCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let result = match cli.command {
        Commands::Resolve(cmd) => cmd.execute(format, &cli.graph_url).await,
        Commands::Annotate(cmd) => cmd.execute(format, &cli.graph_url).await,
        Commands::Whoami(cmd) => cmd.execute(format, &cli.graph_url).await,
    };

    if let Err(err) = result {
        get_formatter(format).error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
