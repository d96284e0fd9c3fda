//! HTTP client for the ClawShare API.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use clawshare_core::error::{AppError, ErrorKind};
use clawshare_entity::share::ShareView;

/// Error body returned by the server for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    code: Option<String>,
}

/// `POST /api/share` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedShare {
    /// Share identifier.
    pub share_id: String,
    /// Presigned PUT URL.
    pub upload_url: String,
    /// Public object URL.
    pub public_url: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Share page URL.
    pub share_url: String,
}

/// `GET /api/download` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShare {
    /// Share metadata.
    pub meta: ShareView,
    /// Presigned GET URL.
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
struct ShareEnvelope {
    share: ShareView,
}

#[derive(Debug, Deserialize)]
struct ShareListEnvelope {
    shares: Vec<ShareView>,
}

/// Parameters of a new share.
#[derive(Debug, Clone)]
pub struct NewShare {
    /// File name sent to the server.
    pub file_name: String,
    /// MIME type of the file.
    pub content_type: String,
    /// File contents.
    pub data: Vec<u8>,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Optional password.
    pub password: Option<String>,
    /// Force download rather than inline view.
    pub is_download: bool,
}

/// Thin wrapper over `reqwest` bound to one ClawShare server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(300))
            .user_agent(concat!("clawshare-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, AppError> {
        Url::parse_with_params(&format!("{}{path}", self.base), params)
            .map_err(|e| AppError::validation(format!("Invalid server URL '{}': {e}", self.base)))
    }

    /// Register a share and upload its body to the presigned URL.
    pub async fn upload(&self, share: NewShare) -> Result<CreatedShare, AppError> {
        let file_part = reqwest::multipart::Part::bytes(share.data.clone())
            .file_name(share.file_name.clone())
            .mime_str(&share.content_type)
            .map_err(|e| AppError::validation(format!("Invalid content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("expiresIn", share.expires_in.to_string())
            .text("password", share.password.clone().unwrap_or_default())
            .text("download", share.is_download.to_string());

        let url = self.endpoint("/api/share", &[])?;
        tracing::debug!(%url, file = %share.file_name, "Creating share");
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let created: CreatedShare = decode(response).await?;

        tracing::debug!(share_id = %created.share_id, "Uploading object");
        let put = self
            .http
            .put(&created.upload_url)
            .header(reqwest::header::CONTENT_TYPE, &share.content_type)
            .body(share.data)
            .send()
            .await
            .map_err(transport_error)?;
        if !put.status().is_success() {
            return Err(AppError::storage(format!(
                "Object upload failed with status {}",
                put.status()
            )));
        }

        Ok(created)
    }

    /// Resolve a share to a download URL.
    pub async fn resolve(
        &self,
        id: &str,
        password: Option<&str>,
    ) -> Result<ResolvedShare, AppError> {
        let mut params = vec![("id", id)];
        if let Some(password) = password {
            params.push(("password", password));
        }
        let url = self.endpoint("/api/download", &params)?;
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    /// Fetch a presigned URL's body.
    pub async fn fetch(&self, url: &str) -> Result<Response, AppError> {
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "Object download failed with status {}",
                response.status()
            )));
        }
        Ok(response)
    }

    /// Public metadata of one share.
    pub async fn info(&self, id: &str) -> Result<ShareView, AppError> {
        let url = self.endpoint("/api/share", &[("id", id)])?;
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let envelope: ShareEnvelope = decode(response).await?;
        Ok(envelope.share)
    }

    /// Every share on the server.
    pub async fn list(&self) -> Result<Vec<ShareView>, AppError> {
        let url = self.endpoint("/api/share", &[("list", "true")])?;
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let envelope: ShareListEnvelope = decode(response).await?;
        Ok(envelope.shares)
    }

    /// Delete a share's metadata.
    pub async fn revoke(&self, id: &str) -> Result<(), AppError> {
        let url = self.endpoint("/api/download", &[("id", id)])?;
        let response = self.http.delete(url).send().await.map_err(transport_error)?;
        let _: serde_json::Value = decode(response).await?;
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::internal(format!("Request failed: {err}"))
}

/// Decode a successful JSON body or turn an error body into an `AppError`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    if status.is_success() {
        return serde_json::from_slice(&bytes).map_err(|e| {
            AppError::serialization(format!("Unexpected response from server: {e}"))
        });
    }

    let body: Option<ErrorBody> = serde_json::from_slice(&bytes).ok();
    let (message, code) = match body {
        Some(ErrorBody { error, code }) => (error, code),
        None => (None, None),
    };
    Err(AppError::new(
        kind_for(status, code.as_deref()),
        message.unwrap_or_else(|| format!("Server returned {status}")),
    ))
}

/// Map a server error code (or, failing that, the status) to an error kind.
pub fn kind_for(status: StatusCode, code: Option<&str>) -> ErrorKind {
    match code {
        Some("VALIDATION_ERROR") => ErrorKind::Validation,
        Some("NOT_FOUND") => ErrorKind::NotFound,
        Some("PASSWORD_REQUIRED") => ErrorKind::PasswordRequired,
        Some("INVALID_PASSWORD") => ErrorKind::InvalidPassword,
        Some("SHARE_EXPIRED") => ErrorKind::Expired,
        _ => match status {
            StatusCode::BAD_REQUEST => ErrorKind::Validation,
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::UNAUTHORIZED => ErrorKind::InvalidPassword,
            StatusCode::GONE => ErrorKind::Expired,
            _ => ErrorKind::Internal,
        },
    }
}

/// Accept a bare share id or any URL whose last path segment is the id.
pub fn share_id_from_arg(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_suffix = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches('/');
    without_suffix
        .rsplit('/')
        .next()
        .unwrap_or(without_suffix)
}

/// MIME type guessed from a file name's extension.
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .to_string()
}
