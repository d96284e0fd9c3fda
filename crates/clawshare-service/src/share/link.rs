//! Share identifiers and the human-facing links built from them.

use clawshare_core::types::ShareId;

/// Mints share identifiers and builds share page URLs.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Externally visible base URL, without a trailing slash.
    base_url: String,
}

impl LinkService {
    /// Creates a link service for the given public base URL.
    pub fn new(public_base_url: &str) -> Self {
        Self {
            base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Generates a fresh share identifier.
    ///
    /// Uniqueness is probabilistic; the store is not consulted.
    pub fn generate_id(&self) -> ShareId {
        ShareId::generate()
    }

    /// URL of the share page for `id`.
    pub fn share_url(&self, id: &ShareId) -> String {
        format!("{}/s/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url_trims_trailing_slash() {
        let links = LinkService::new("https://share.example.com/");
        let id = ShareId::parse("abc-123456").unwrap();
        assert_eq!(links.share_url(&id), "https://share.example.com/s/abc-123456");
    }

    #[test]
    fn test_generated_ids_differ() {
        let links = LinkService::new("http://localhost:3000");
        assert_ne!(links.generate_id(), links.generate_id());
    }
}
