//! # clawshare-database
//!
//! Metadata store implementations for ClawShare: a single JSON document on
//! disk and an in-memory map. Both implement the generic
//! [`Repository`](clawshare_core::traits::Repository) trait.

pub mod store;

pub use store::{JsonFileStore, MemoryStore, ShareStore, open_share_store};
