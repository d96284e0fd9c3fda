//! Share resolution and revocation handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde_json::json;

use super::{required_share_id, required_share_key};
use crate::dto::request::DownloadQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/download?id=&password=
pub async fn resolve_share(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = required_share_id(query.id.as_deref())?;
    let resolved = state
        .share_service
        .resolve(&id, query.password.as_deref())
        .await?;

    Ok(Json(json!({
        "success": true,
        "meta": resolved.meta,
        "downloadUrl": resolved.download_url,
    })))
}

/// DELETE /api/download?id=
///
/// Any non-blank id is accepted; revoking only removes a metadata key.
pub async fn revoke_share(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = required_share_key(query.id.as_deref())?;
    state.share_service.revoke(&id).await?;
    Ok(Json(json!({ "success": true, "message": "Share revoked" })))
}
