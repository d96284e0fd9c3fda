//! Route handlers organized by domain.

pub mod download;
pub mod health;
pub mod pages;
pub mod share;

use clawshare_core::error::AppError;
use clawshare_core::types::ShareId;

use crate::dto::request::non_empty;

/// Parse a required `id` query parameter.
pub(crate) fn required_share_id(raw: Option<&str>) -> Result<ShareId, AppError> {
    let raw = non_empty(raw).ok_or_else(|| AppError::validation("Missing share ID"))?;
    ShareId::parse(raw)
}

/// A required `id` query parameter used only as a metadata key.
pub(crate) fn required_share_key(raw: Option<&str>) -> Result<ShareId, AppError> {
    ShareId::from_key(raw.unwrap_or_default())
        .ok_or_else(|| AppError::validation("Missing share ID"))
}
