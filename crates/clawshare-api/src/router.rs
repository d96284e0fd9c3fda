//! Route definitions for the ClawShare HTTP API and pages.
//!
//! JSON endpoints are mounted under `/api`; the HTML pages live at the root.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Allowance for multipart boundaries and the small text fields.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit =
        state.config.share.max_file_size_bytes as usize + MULTIPART_OVERHEAD_BYTES;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(share_routes())
        .merge(download_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Share creation, lookup, and listing
fn share_routes() -> Router<AppState> {
    Router::new().route(
        "/share",
        get(handlers::share::get_share).post(handlers::share::create_share),
    )
}

/// Share resolution and revocation
fn download_routes() -> Router<AppState> {
    Router::new().route(
        "/download",
        get(handlers::download::resolve_share).delete(handlers::download::revoke_share),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Upload form and share page
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/s/{id}", get(handlers::pages::share_page))
}
