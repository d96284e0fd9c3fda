//! # clawshare-auth
//!
//! Share secrets for ClawShare. A share is either open or gated by a single
//! shared password; there are no user accounts.
//!
//! ## Modules
//!
//! - `password` - Argon2id hashing and verification of share passwords

pub mod password;

pub use password::PasswordHasher;
