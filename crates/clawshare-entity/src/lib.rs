//! # clawshare-entity
//!
//! Domain entity models for ClawShare. The share record is the only
//! persisted entity; its public projection is what the HTTP API returns.

pub mod share;
