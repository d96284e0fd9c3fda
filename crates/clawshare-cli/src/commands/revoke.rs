//! Share revocation command.

use clap::Args;

use crate::client::{ApiClient, share_id_from_arg};
use crate::output;
use clawshare_core::error::AppError;

/// Arguments for the revoke command
#[derive(Debug, Args)]
pub struct RevokeArgs {
    /// Share ID or share URL
    pub share: String,
}

/// Execute the revoke command
pub async fn execute(args: &RevokeArgs, client: &ApiClient) -> Result<(), AppError> {
    let id = share_id_from_arg(&args.share);
    client.revoke(id).await?;
    output::print_success(&format!("Share '{id}' revoked"));
    Ok(())
}
