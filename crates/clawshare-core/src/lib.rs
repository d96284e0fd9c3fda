//! # clawshare-core
//!
//! Core crate for ClawShare. Contains the configuration schemas, the share
//! identifier type, the storage traits implemented by the other crates, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other ClawShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
