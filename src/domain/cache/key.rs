//! Cache key normalization and generation
//!
//! Both pipeline caches key on user-submitted text. Keys are normalized the
//! same way on every lookup and insert so equivalent submissions ("Hello"
//! vs. "hello ") resolve to one entry.

/// Normalizes content text for cache keying: trimmed and case-folded.
pub fn normalize_content(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Generates namespaced cache keys from content text
#[derive(Debug, Clone)]
pub struct ContentKeyGenerator {
    namespace: String,
}

impl ContentKeyGenerator {
    /// Creates a generator for the given key namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the key namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Generates the cache key for a piece of content
    pub fn generate(&self, content: &str) -> String {
        format!("{}:{}", self.namespace, normalize_content(content))
    }
}
