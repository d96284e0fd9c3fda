//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use clawshare_api::{AppState, build_router};
use clawshare_auth::PasswordHasher;
use clawshare_core::config::AppConfig;
use clawshare_core::result::AppResult;
use clawshare_core::traits::{Disposition, ObjectStorage, PresignedUpload};
use clawshare_database::MemoryStore;
use clawshare_entity::share::ShareRecord;
use clawshare_service::{LinkService, ShareService};

/// Multipart boundary used by [`MultipartBody`].
pub const BOUNDARY: &str = "clawshare-test-boundary";

/// Object storage that signs nothing and counts what it was asked for.
#[derive(Debug, Default)]
pub struct FakeStorage {
    /// Upload URLs issued.
    pub uploads: AtomicUsize,
    /// Download URLs issued.
    pub downloads: AtomicUsize,
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    fn provider_type(&self) -> &str {
        "fake"
    }

    async fn issue_upload_url(
        &self,
        key: &str,
        _file_name: &str,
        _content_type: &str,
        _ttl: Duration,
    ) -> AppResult<PresignedUpload> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(PresignedUpload {
            upload_url: format!("https://storage.test/clawshare/{key}?X-Amz-Signature=put"),
            public_url: format!("https://pub.test/{key}"),
        })
    }

    async fn issue_download_url(
        &self,
        key: &str,
        file_name: &str,
        disposition: Disposition,
        _ttl: Duration,
    ) -> AppResult<String> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "https://storage.test/clawshare/{key}?name={file_name}&disposition={disposition:?}"
        ))
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for direct inspection
    pub store: MemoryStore<ShareRecord>,
    /// Fake object storage
    pub storage: Arc<FakeStorage>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.server.public_base_url = "http://share.test".to_string();
        Self::with_config(config)
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = MemoryStore::<ShareRecord>::new();
        let storage = Arc::new(FakeStorage::default());

        let share_service = Arc::new(ShareService::new(
            Arc::new(store.clone()),
            storage.clone(),
            Arc::new(PasswordHasher::new()),
            LinkService::new(&config.server.public_base_url),
            config.share.clone(),
        ));

        let router = build_router(AppState::new(Arc::new(config.clone()), share_service));

        Self {
            router,
            store,
            storage,
            config,
        }
    }

    /// Make a request without a body
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST a multipart form
    pub async fn post_multipart(&self, path: &str, body: MultipartBody) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body.finish()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Create a share for `file_name` with `size` bytes and extra text fields.
    pub async fn create_share(
        &self,
        file_name: &str,
        size: usize,
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let mut body = MultipartBody::new().file("file", file_name, "text/plain", &vec![b'x'; size]);
        for (name, value) in fields {
            body = body.text(name, value);
        }
        self.post_multipart("/api/share", body).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for non-JSON responses)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

/// Minimal `multipart/form-data` body builder.
#[derive(Debug, Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Start an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    /// Close the form and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}
