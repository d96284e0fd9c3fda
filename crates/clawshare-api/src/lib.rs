//! # clawshare-api
//!
//! HTTP API layer for ClawShare built on Axum.
//!
//! Provides the JSON endpoints under `/api`, the server-rendered upload and
//! share pages, middleware (CORS, request logging), DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
