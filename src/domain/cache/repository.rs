//! Caching abstraction shared by the embedding and verdict caches
//!
//! The trait moves JSON strings so it stays dyn-compatible; callers go
//! through [`CacheExt`] for typed values.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::DomainError;

/// Async key-value store with per-entry TTL
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Look up the JSON payload stored under a key
    async fn get_json(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store a JSON payload under a key for at most `ttl`
    async fn put_json(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Drop a key, reporting whether it was present
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Whether a live entry exists for the key
    async fn contains_key(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get_json(key).await?.is_some())
    }

    /// Drop every entry
    async fn clear(&self) -> Result<(), DomainError>;

    /// Approximate number of live entries
    async fn entry_count(&self) -> Result<usize, DomainError>;
}

/// Typed get/set over the JSON transport
pub trait CacheExt: Cache {
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            let Some(payload) = self.get_json(key).await? else {
                return Ok(None);
            };
            serde_json::from_str(&payload)
                .map(Some)
                .map_err(|e| DomainError::cache(format!("Corrupt cache entry for {key}: {e}")))
        }
    }

    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let payload = serde_json::to_string(value)
                .map_err(|e| DomainError::cache(format!("Unserializable cache value: {e}")))?;
            self.put_json(key, &payload, ttl).await
        }
    }
}

impl<T: Cache + ?Sized> CacheExt for T {}
