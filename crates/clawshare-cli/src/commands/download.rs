//! File download command.

use std::path::{Path, PathBuf};

use clap::Args;
use tokio::io::AsyncWriteExt;

use crate::client::{ApiClient, share_id_from_arg};
use crate::output::{self, OutputFormat};
use clawshare_core::error::AppError;

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Share ID or share URL
    pub share: String,

    /// Directory to save the file into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Save under this name instead of the original one
    #[arg(long)]
    pub filename: Option<String>,

    /// Share password
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Where to write the file: the override or the shared name, reduced to its
/// final component so a share can't write outside `dir`.
pub fn target_path(dir: &Path, filename: Option<&str>, shared_name: &str) -> PathBuf {
    let requested = filename.unwrap_or(shared_name);
    let base = Path::new(requested)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("download");
    dir.join(base)
}

/// Execute the download command
pub async fn execute(
    args: &DownloadArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let id = share_id_from_arg(&args.share);
    let resolved = client.resolve(id, args.password.as_deref()).await?;

    tokio::fs::create_dir_all(&args.output).await?;
    let path = target_path(&args.output, args.filename.as_deref(), &resolved.meta.name);

    let mut response = client.fetch(&resolved.download_url).await?;
    let mut file = tokio::fs::File::create(&path).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| AppError::storage(format!("Download interrupted: {e}")))?
    {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    tracing::debug!(share_id = %id, bytes = written, path = %path.display(), "Download complete");

    match format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "id": resolved.meta.id,
            "path": path.display().to_string(),
            "size": written,
        })),
        OutputFormat::Table => output::print_success(&format!(
            "Saved '{}' ({})",
            path.display(),
            output::human_size(written)
        )),
    }

    Ok(())
}
