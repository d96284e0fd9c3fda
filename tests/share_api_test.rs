//! Integration tests for the share API and pages.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};

use clawshare_core::config::AppConfig;
use clawshare_core::traits::Repository;
use clawshare_core::types::ShareId;

use helpers::{MultipartBody, TestApp};

fn share_id(response: &helpers::TestResponse) -> String {
    response.body["shareId"]
        .as_str()
        .expect("shareId missing")
        .to_string()
}

#[tokio::test]
async fn test_create_share_returns_links() {
    let app = TestApp::new();
    let response = app.create_share("notes.txt", 128, &[]).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    let id = share_id(&response);
    assert_eq!(response.body["expiresIn"], 604_800);
    assert_eq!(
        response.body["shareUrl"],
        format!("http://share.test/s/{id}")
    );
    assert_eq!(response.body["publicUrl"], format!("https://pub.test/{id}"));
    assert!(
        response.body["uploadUrl"]
            .as_str()
            .unwrap()
            .contains(&id)
    );

    let record = app
        .store
        .read(&ShareId::parse(&id).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.size, 128);
    assert_eq!(record.content_type, "text/plain");
}

#[tokio::test]
async fn test_create_then_download() {
    let app = TestApp::new();
    let id = share_id(&app.create_share("notes.txt", 16, &[]).await);

    let response = app
        .request("GET", &format!("/api/download?id={id}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["name"], "notes.txt");
    assert_eq!(response.body["meta"]["passwordProtected"], false);
    assert!(response.body["meta"].get("password").is_none());
    assert!(
        response.body["downloadUrl"]
            .as_str()
            .unwrap()
            .ends_with("disposition=Inline")
    );
}

#[tokio::test]
async fn test_download_flag_forces_attachment() {
    let app = TestApp::new();
    let id = share_id(&app.create_share("deck.pptx", 16, &[("download", "true")]).await);

    let response = app
        .request("GET", &format!("/api/download?id={id}"))
        .await;

    assert_eq!(response.body["meta"]["isDownload"], true);
    assert!(
        response.body["downloadUrl"]
            .as_str()
            .unwrap()
            .ends_with("disposition=Attachment")
    );
}

#[tokio::test]
async fn test_missing_file_is_rejected() {
    let app = TestApp::new();
    let body = MultipartBody::new().text("expiresIn", "3600");

    let response = app.post_multipart("/api/share", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["error"], "No file provided");
}

#[tokio::test]
async fn test_file_type_boundary() {
    let app = TestApp::new();

    let accepted = app.create_share("report.PDF", 10, &[]).await;
    assert_eq!(accepted.status, StatusCode::OK);

    let rejected = app.create_share("archive.zip", 10, &[]).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["error"], "File type not allowed");
}

#[tokio::test]
async fn test_file_size_boundary() {
    let mut config = AppConfig::default();
    config.share.max_file_size_bytes = 1024;
    let app = TestApp::with_config(config);

    let at_limit = app.create_share("a.txt", 1024, &[]).await;
    assert_eq!(at_limit.status, StatusCode::OK);

    let over = app.create_share("b.txt", 1025, &[]).await;
    assert_eq!(over.status, StatusCode::BAD_REQUEST);
    assert_eq!(over.body["code"], "VALIDATION_ERROR");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_default_size_limit_is_fifty_mib() {
    let app = TestApp::new();
    let max = app.config.share.max_file_size_bytes as usize;
    assert_eq!(max, 52_428_800);

    let at_limit = app.create_share("big.pdf", max, &[]).await;
    assert_eq!(at_limit.status, StatusCode::OK, "{:?}", at_limit.body);

    let over = app.create_share("bigger.pdf", max + 1, &[]).await;
    assert_eq!(over.status, StatusCode::BAD_REQUEST);
    assert_eq!(over.body["code"], "VALIDATION_ERROR");
    assert_eq!(over.body["error"], "File too large (max 50MB)");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_default_expiry_is_seven_days() {
    let app = TestApp::new();
    let response = app.create_share("week.md", 1, &[]).await;
    let id = share_id(&response);

    let info = app.request("GET", &format!("/api/share?id={id}")).await;
    let created: DateTime<Utc> = info.body["share"]["createdAt"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let expires: DateTime<Utc> = info.body["share"]["expiresAt"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!((expires - created).num_seconds(), 604_800);
}

#[tokio::test]
async fn test_invalid_expiry_is_rejected() {
    let app = TestApp::new();

    for value in ["0", "-5", "soon", "18446744073709551615"] {
        let response = app
            .create_share("a.txt", 1, &[("expiresIn", value)])
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "expiresIn={value}");
    }

    let response = app
        .create_share("a.txt", 1, &[("expiresIn", "3600")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expiresIn"], 3600);
}

#[tokio::test]
async fn test_long_expiry_is_accepted() {
    let app = TestApp::new();

    let response = app
        .create_share("a.txt", 1, &[("expiresIn", "2678400")])
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["expiresIn"], 2_678_400);
}

#[tokio::test]
async fn test_password_protected_share() {
    let app = TestApp::new();
    let id = share_id(
        &app.create_share("secret.pdf", 1, &[("password", "hunter2")])
            .await,
    );

    let missing = app.request("GET", &format!("/api/download?id={id}")).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["code"], "PASSWORD_REQUIRED");

    let wrong = app
        .request("GET", &format!("/api/download?id={id}&password=nope"))
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["code"], "INVALID_PASSWORD");
    assert_eq!(app.storage.downloads.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(app.store.len(), 1);

    let right = app
        .request("GET", &format!("/api/download?id={id}&password=hunter2"))
        .await;
    assert_eq!(right.status, StatusCode::OK);
    assert_eq!(right.body["meta"]["passwordProtected"], true);
}

#[tokio::test]
async fn test_password_never_leaves_server() {
    let app = TestApp::new();
    let id = share_id(
        &app.create_share("secret.pdf", 1, &[("password", "hunter2")])
            .await,
    );

    let record = app
        .store
        .read(&ShareId::parse(&id).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_ne!(record.password.as_deref(), Some("hunter2"));

    let info = app.request("GET", &format!("/api/share?id={id}")).await;
    assert!(!info.text.contains("argon2"));
    assert!(!info.text.contains("hunter2"));

    let list = app.request("GET", "/api/share?list=1").await;
    assert!(!list.text.contains("argon2"));
}

#[tokio::test]
async fn test_expired_share_is_gone() {
    let app = TestApp::new();
    let id = share_id(&app.create_share("old.txt", 1, &[]).await);
    let key = ShareId::parse(&id).unwrap();

    let mut record = app.store.read(&key).await.unwrap().unwrap();
    record.expires_at = Utc::now() - Duration::seconds(5);
    app.store.write(&key, &record).await.unwrap();

    let expired = app.request("GET", &format!("/api/download?id={id}")).await;
    assert_eq!(expired.status, StatusCode::GONE);
    assert_eq!(expired.body["code"], "SHARE_EXPIRED");

    let after = app.request("GET", &format!("/api/download?id={id}")).await;
    assert_eq!(after.status, StatusCode::NOT_FOUND);
    assert_eq!(after.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let app = TestApp::new();
    let id = share_id(&app.create_share("gone.txt", 1, &[]).await);

    for _ in 0..2 {
        let response = app
            .request("DELETE", &format!("/api/download?id={id}"))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["message"], "Share revoked");
    }

    assert!(app.store.is_empty());
    let info = app.request("GET", &format!("/api/share?id={id}")).await;
    assert_eq!(info.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_revoke_accepts_any_present_id() {
    let app = TestApp::new();

    let response = app.request("DELETE", "/api/download?id=a.b").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
}

#[tokio::test]
async fn test_handler_errors_render_error_body() {
    let app = TestApp::new();

    let malformed = app.request("GET", "/api/download?id=a.b").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["success"], false);
    assert_eq!(malformed.body["code"], "VALIDATION_ERROR");

    let unknown = app.request("GET", "/api/download?id=nothere-000000").await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["success"], false);
    assert_eq!(unknown.body["code"], "NOT_FOUND");
    assert_eq!(unknown.body["error"], "Share not found");
}

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    let app = TestApp::new();

    let get = app.request("GET", "/api/download").await;
    assert_eq!(get.status, StatusCode::BAD_REQUEST);
    assert_eq!(get.body["error"], "Missing share ID");

    let delete = app.request("DELETE", "/api/download?id=").await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);

    let info = app.request("GET", "/api/share").await;
    assert_eq!(info.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_share_is_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/share?id=nothere-000000").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_every_share() {
    let app = TestApp::new();
    app.create_share("one.txt", 1, &[]).await;
    app.create_share("two.txt", 1, &[]).await;

    let response = app.request("GET", "/api/share?list=1").await;

    assert_eq!(response.status, StatusCode::OK);
    let shares = response.body["shares"].as_array().unwrap();
    assert_eq!(shares.len(), 2);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_upload_page() {
    let app = TestApp::new();
    let response = app.request("GET", "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("/api/share"));
    assert!(response.text.contains("uploadUrl"));
}

#[tokio::test]
async fn test_share_page_flow() {
    let app = TestApp::new();
    let open = share_id(&app.create_share("open.txt", 2048, &[]).await);
    let locked = share_id(
        &app.create_share("locked.txt", 1, &[("password", "pw")])
            .await,
    );

    let page = app.request("GET", &format!("/s/{open}")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text.contains("open.txt"));
    assert!(page.text.contains("2.0 KB"));

    let form = app.request("GET", &format!("/s/{locked}")).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.text.contains("name=\"password\""));

    let wrong = app.request("GET", &format!("/s/{locked}?password=x")).await;
    assert!(wrong.text.contains("Incorrect password"));

    let unlocked = app.request("GET", &format!("/s/{locked}?password=pw")).await;
    assert!(unlocked.text.contains("locked.txt"));

    let missing = app.request("GET", "/s/nothere-000000").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
