//! CLI command definitions and dispatch.

pub mod download;
pub mod info;
pub mod list;
pub mod revoke;
pub mod upload;

use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::output::OutputFormat;
use clawshare_core::error::AppError;

/// ClawShare - share files through expiring links
#[derive(Debug, Parser)]
#[command(name = "clawshare", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the ClawShare server
    #[arg(long, env = "CLAWSHARE_URL", default_value = "https://clawshare.io")]
    pub url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a file and print its share link
    Upload(upload::UploadArgs),
    /// Download a shared file
    Download(download::DownloadArgs),
    /// Show a share's metadata
    Info(info::InfoArgs),
    /// List every share on the server
    List,
    /// Revoke a share
    Revoke(revoke::RevokeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let client = ApiClient::new(&self.url)?;
        match &self.command {
            Commands::Upload(args) => upload::execute(args, &client, self.format).await,
            Commands::Download(args) => download::execute(args, &client, self.format).await,
            Commands::Info(args) => info::execute(args, &client, self.format).await,
            Commands::List => list::execute(&client, self.format).await,
            Commands::Revoke(args) => revoke::execute(args, &client).await,
        }
    }
}
