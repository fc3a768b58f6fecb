//! Skyvault CLI - Command-line interface for the Skyvault storage service
//!
//! Provides commands for:
//! - Account signup and login/logout
//! - Listing stored files
//! - Uploading with duplicate-name prevention
//! - Downloading and deleting files

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::auth::AuthCommand;
use commands::files::{DeleteCommand, DownloadCommand, ListCommand, UploadCommand};
use output::OutputFormat;
use skyvault_core::config::Config;

#[derive(Debug, Parser)]
#[command(name = "skyvault", version, about = "Client for the Skyvault storage service")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Account and session commands
    #[command(subcommand)]
    Auth(AuthCommand),
    /// List stored files
    List(ListCommand),
    /// Upload a local file
    Upload(UploadCommand),
    /// Download a stored file
    Download(DownloadCommand),
    /// Delete a stored file
    Delete(DeleteCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Commands::Auth(cmd) => cmd.execute(&config_path, format).await,
        Commands::List(cmd) => cmd.execute(&config_path, format).await,
        Commands::Upload(cmd) => cmd.execute(&config_path, format).await,
        Commands::Download(cmd) => cmd.execute(&config_path, format).await,
        Commands::Delete(cmd) => cmd.execute(&config_path, format).await,
    }
}
