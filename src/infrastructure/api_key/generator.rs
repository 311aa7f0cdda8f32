//! API Key generation
//!
//! Produces URL-safe, high-entropy bearer strings from the operating
//! system's cryptographically secure random source.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;

const DEFAULT_KEY_BYTES: usize = 32;

/// Generator for opaque API key strings
#[derive(Debug, Clone)]
pub struct ApiKeyGenerator {
    /// Number of random bytes backing each key
    key_bytes: usize,
}

impl ApiKeyGenerator {
    /// Create a generator with the default entropy size (32 bytes)
    pub fn new() -> Self {
        Self {
            key_bytes: DEFAULT_KEY_BYTES,
        }
    }

    /// Set the number of random bytes
    pub fn with_key_bytes(mut self, bytes: usize) -> Self {
        self.key_bytes = bytes;
        self
    }

    /// Generate a new key string.
    ///
    /// Failure to draw from the OS entropy source aborts the process; it is
    /// not a recoverable condition.
    pub fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.key_bytes];
        OsRng.fill_bytes(&mut random_bytes);

        URL_SAFE_NO_PAD.encode(&random_bytes)
    }
}

impl Default for ApiKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_length() {
        let generator = ApiKeyGenerator::new();
        let key = generator.generate();

        // 32 bytes base64-encoded without padding = 43 chars
        assert_eq!(key.len(), 43);
    }

    #[test]
    fn test_generate_custom_length() {
        let generator = ApiKeyGenerator::new().with_key_bytes(64);
        let key = generator.generate();

        assert_eq!(key.len(), 86);
    }

    #[test]
    fn test_key_uniqueness() {
        let generator = ApiKeyGenerator::new();

        let key1 = generator.generate();
        let key2 = generator.generate();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_key_is_url_safe() {
        let generator = ApiKeyGenerator::new();
        let key = generator.generate();

        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
