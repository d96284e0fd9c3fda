//! Share listing command.

use serde::Serialize;
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};
use clawshare_core::error::AppError;
use clawshare_entity::share::ShareView;

/// Share display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    /// Share ID
    id: String,
    /// File name
    name: String,
    /// Size
    size: String,
    /// Expiry
    expires_at: String,
    /// Password protected
    protected: String,
}

impl From<&ShareView> for ShareRow {
    fn from(share: &ShareView) -> Self {
        Self {
            id: share.id.to_string(),
            name: share.name.clone(),
            size: output::human_size(share.size),
            expires_at: share.expires_at.format("%Y-%m-%d %H:%M").to_string(),
            protected: if share.password_protected { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Execute the list command
pub async fn execute(client: &ApiClient, format: OutputFormat) -> Result<(), AppError> {
    let shares = client.list().await?;

    match format {
        OutputFormat::Json => output::print_json(&shares),
        OutputFormat::Table => {
            let rows: Vec<ShareRow> = shares.iter().map(ShareRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
