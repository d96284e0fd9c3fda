//! Share metadata command.

use clap::Args;

use crate::client::{ApiClient, share_id_from_arg};
use crate::output::{self, OutputFormat};
use clawshare_core::error::AppError;

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Share ID or share URL
    pub share: String,
}

/// Execute the info command
pub async fn execute(
    args: &InfoArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let share = client.info(share_id_from_arg(&args.share)).await?;

    match format {
        OutputFormat::Json => output::print_json(&share),
        OutputFormat::Table => {
            println!("Share {}", share.id);
            output::print_kv("Name", &share.name);
            output::print_kv("Type", &share.content_type);
            output::print_kv("Size", &output::human_size(share.size));
            output::print_kv(
                "Created",
                &share.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
            output::print_kv(
                "Expires",
                &share.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
            output::print_kv(
                "Password",
                if share.password_protected { "yes" } else { "no" },
            );
            output::print_kv(
                "Mode",
                if share.is_download { "download" } else { "view" },
            );
        }
    }

    Ok(())
}
