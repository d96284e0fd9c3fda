//! Share creation, lookup, and listing handlers.

use axum::Json;
use axum::extract::{Multipart, Query, State};
use serde_json::json;

use clawshare_core::error::AppError;
use clawshare_core::types::ShareId;
use clawshare_service::CreateShareRequest;

use crate::dto::request::{ShareQuery, non_empty};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/share
///
/// Multipart fields: `file` (required), `expiresIn`, `password`, `download`.
/// The file part is read only to learn its size; the client uploads the
/// body itself through the returned `uploadUrl`.
pub async fn create_share(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut file: Option<(String, Option<String>, u64)> = None;
    let mut expires_in: Option<u64> = None;
    let mut password: Option<String> = None;
    let mut is_download = false;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(String::from);
                let mut size = 0u64;
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?
                {
                    size += chunk.len() as u64;
                }
                file = Some((file_name, content_type, size));
            }
            "expiresIn" => {
                let text = read_text(field).await?;
                expires_in = match non_empty(Some(&text)) {
                    Some(value) => Some(value.parse().map_err(|_| {
                        AppError::validation("expiresIn must be a whole number of seconds")
                    })?),
                    None => None,
                };
            }
            "password" => password = Some(read_text(field).await?),
            "download" => is_download = read_text(field).await? == "true",
            _ => {}
        }
    }

    let (file_name, content_type, size) =
        file.ok_or_else(|| AppError::validation("No file provided"))?;

    let created = state
        .share_service
        .create(CreateShareRequest {
            file_name,
            content_type,
            size,
            expires_in,
            password,
            is_download,
        })
        .await?;

    Ok(Json(json!({
        "success": true,
        "shareId": created.share_id,
        "uploadUrl": created.upload_url,
        "publicUrl": created.public_url,
        "expiresIn": created.expires_in,
        "expiresAt": created.expires_at,
        "shareUrl": created.share_url,
    })))
}

/// GET /api/share?id= or GET /api/share?list=1
pub async fn get_share(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(raw) = non_empty(query.id.as_deref()) {
        let id = ShareId::parse(raw)?;
        let share = state.share_service.info(&id).await?;
        return Ok(Json(json!({ "success": true, "share": share })));
    }

    if non_empty(query.list.as_deref()).is_some() {
        let shares = state.share_service.list().await?;
        return Ok(Json(json!({ "success": true, "shares": shares })));
    }

    Err(AppError::validation("Missing id or list parameter").into())
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Read error: {e}")))
}
