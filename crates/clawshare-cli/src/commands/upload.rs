//! File upload command.

use std::path::PathBuf;

use clap::Args;

use crate::client::{ApiClient, NewShare, content_type_for};
use crate::output::{self, OutputFormat};
use clawshare_core::error::AppError;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the file to upload
    pub file: PathBuf,

    /// Lifetime of the share in days
    #[arg(short, long, default_value_t = 7)]
    pub expires: u64,

    /// Lifetime of the share in hours (overrides --expires)
    #[arg(long)]
    pub hours: Option<u64>,

    /// Protect the share with a password
    #[arg(short, long)]
    pub password: Option<String>,

    /// Show the file in the browser instead of forcing a download
    #[arg(long)]
    pub view_only: bool,
}

impl UploadArgs {
    /// Requested share lifetime in seconds.
    pub fn expires_in_seconds(&self) -> u64 {
        match self.hours {
            Some(hours) => hours.saturating_mul(3600),
            None => self.expires.saturating_mul(86_400),
        }
    }
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    if !args.file.is_file() {
        return Err(AppError::not_found(format!(
            "File not found: {}",
            args.file.display()
        )));
    }

    let file_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let data = tokio::fs::read(&args.file).await?;
    let size = data.len() as u64;

    if format == OutputFormat::Table {
        println!("Uploading '{file_name}' ({})...", output::human_size(size));
    }

    let created = client
        .upload(NewShare {
            content_type: content_type_for(&file_name),
            file_name: file_name.clone(),
            data,
            expires_in: args.expires_in_seconds(),
            password: args.password.clone(),
            is_download: !args.view_only,
        })
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&created),
        OutputFormat::Table => {
            output::print_success(&format!("Uploaded '{file_name}'"));
            output::print_kv("Share URL", &created.share_url);
            output::print_kv("Share ID", &created.share_id);
            output::print_kv(
                "Expires",
                &created.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
            if args.password.is_some() {
                output::print_kv("Password", "required");
            }
        }
    }

    Ok(())
}
