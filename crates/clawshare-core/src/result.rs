//! Convenience result type alias for ClawShare.

use crate::error::AppError;

/// A specialized `Result` type for ClawShare operations.
pub type AppResult<T> = Result<T, AppError>;
