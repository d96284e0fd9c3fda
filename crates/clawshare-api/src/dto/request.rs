//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/share`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareQuery {
    /// Share to describe.
    pub id: Option<String>,
    /// Any non-empty value lists every share.
    pub list: Option<String>,
}

/// Query string of `GET` and `DELETE /api/download`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadQuery {
    /// Share identifier.
    pub id: Option<String>,
    /// Share password, when the share has one.
    pub password: Option<String>,
}

/// Query string of the `/s/{id}` share page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharePageQuery {
    /// Share password submitted through the page form.
    pub password: Option<String>,
}

/// Non-empty value of an optional query parameter.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
