//! # clawshare-service
//!
//! Business logic for ClawShare. The share service validates uploads,
//! persists share metadata, gates access by expiry and password, and asks
//! the object storage gateway for presigned URLs.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod share;

pub use share::{
    AccessService, CreateShareRequest, CreatedShare, LinkService, ResolvedShare, ShareService,
};
