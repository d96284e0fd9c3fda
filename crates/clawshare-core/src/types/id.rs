//! Share identifiers.
//!
//! An identifier is the base-36 Unix time in milliseconds, a dash, and six
//! random base-36 characters, e.g. `m2x9k1qz-4fj0ab`. Uniqueness is
//! probabilistic: nothing checks a fresh id against the store.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters appended to the time component.
pub const RANDOM_SUFFIX_LEN: usize = 6;

/// Longest identifier accepted from callers.
pub const MAX_ID_LEN: usize = 64;

/// Unique identifier for a share; doubles as the object storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(String);

impl ShareId {
    /// Generate a new identifier from the current time and a random suffix.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        Self::generate_at(millis, &mut rand::rng())
    }

    /// Generate an identifier for a given millisecond timestamp.
    pub fn generate_at<R: Rng>(millis: u64, rng: &mut R) -> Self {
        let suffix: String = (0..RANDOM_SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}-{}", to_base36(millis), suffix))
    }

    /// Parse an identifier supplied by a caller.
    ///
    /// Accepts `[0-9A-Za-z_-]` up to [`MAX_ID_LEN`] characters so that ids
    /// taken from URLs stay inside the object key namespace.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::validation("Missing share ID"));
        }
        if raw.len() > MAX_ID_LEN {
            return Err(AppError::validation("Share ID is too long"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::validation("Share ID contains invalid characters"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wrap a metadata key as-is, without the character rules of [`parse`].
    ///
    /// Only for operations that never reach object storage, such as deleting
    /// a record. Returns `None` for blank input.
    ///
    /// [`parse`]: ShareId::parse
    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self(raw.to_string()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The millisecond timestamp encoded in a generated identifier.
    pub fn timestamp_millis(&self) -> Option<u64> {
        let (time, _) = self.0.split_once('-')?;
        u64::from_str_radix(time, 36).ok()
    }
}

/// Encode an integer in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShareId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ShareId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShareId> for String {
    fn from(id: ShareId) -> String {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generated_shape() {
        let id = ShareId::generate();
        let (time, suffix) = id.as_str().split_once('-').expect("dash separator");
        assert!(!time.is_empty());
        assert_eq!(suffix.len(), RANDOM_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_timestamp_round_trips() {
        let id = ShareId::generate_at(1_700_000_000_000, &mut rand::rng());
        assert_eq!(id.timestamp_millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = ShareId::generate();
        let b = ShareId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_id_parses() {
        let id = ShareId::generate();
        let parsed: ShareId = id.to_string().parse().expect("should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ShareId::parse("").is_err());
        assert!(ShareId::parse("   ").is_err());
        assert!(ShareId::parse("../etc/passwd").is_err());
        assert!(ShareId::parse("a b").is_err());
        assert!(ShareId::parse(&"a".repeat(MAX_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_from_key_keeps_any_non_blank_key() {
        assert_eq!(ShareId::from_key(" a.b ").unwrap().as_str(), "a.b");
        assert!(ShareId::from_key("  ").is_none());
    }
}
