//! # clawshare-storage
//!
//! Object storage gateway for ClawShare. Objects never pass through the
//! server: providers only mint presigned URLs the client uses directly.
//! Also holds the file type allow-list applied before a URL is issued.

pub mod providers;
pub mod validation;

pub use providers::{S3ObjectStorage, build_object_storage};
pub use validation::is_allowed_type;
