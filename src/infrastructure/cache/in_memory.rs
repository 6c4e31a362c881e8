//! Bounded in-process cache backed by moka
//!
//! Replaces the unbounded grow-forever maps this pipeline originally sat
//! on: capacity and TTL come from configuration, and every entry carries
//! its own deadline so callers can use a shorter TTL than the cache-wide
//! one.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::DomainError;
use crate::domain::cache::Cache;

/// Sizing and expiry knobs for [`InMemoryCache`]
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Entry count bound; moka evicts beyond this
    pub max_capacity: u64,
    /// Cache-wide TTL, the ceiling for per-entry deadlines
    pub default_ttl: Duration,
    /// Optional idle eviction
    pub time_to_idle: Option<Duration>,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            default_ttl: Duration::from_secs(3600),
            time_to_idle: None,
        }
    }
}

impl InMemoryCacheConfig {
    /// Bound the number of entries
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Set the cache-wide TTL
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Evict entries idle for longer than `tti`
    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }
}

#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    deadline: Instant,
}

impl Entry {
    fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// moka-backed [`Cache`] implementation
#[derive(Debug)]
pub struct InMemoryCache {
    inner: MokaCache<String, Entry>,
}

impl InMemoryCache {
    /// Cache with default sizing
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Cache sized from the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let mut builder = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.default_ttl);

        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            inner: builder.build(),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_json(&self, key: &str) -> Result<Option<String>, DomainError> {
        let Some(entry) = self.inner.get(key).await else {
            return Ok(None);
        };

        if entry.expired() {
            self.inner.remove(key).await;
            return Ok(None);
        }

        Ok(Some(entry.payload))
    }

    async fn put_json(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), DomainError> {
        let entry = Entry {
            payload: payload.to_string(),
            deadline: Instant::now() + ttl,
        };
        self.inner.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.inner.remove(key).await.is_some())
    }

    async fn contains_key(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get_json(key).await?.is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
        Ok(())
    }

    async fn entry_count(&self) -> Result<usize, DomainError> {
        self.inner.run_pending_tasks().await;
        Ok(self.inner.entry_count() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_roundtrips_an_embedding_vector() {
        let cache = InMemoryCache::new();

        let vector = vec![0.25_f32, -0.5, 1.0];
        cache.set("emb:launch fast", &vector, MINUTE).await.unwrap();

        let back: Option<Vec<f32>> = cache.get("emb:launch fast").await.unwrap();
        assert_eq!(back, Some(vector));
    }

    #[tokio::test]
    async fn test_roundtrips_a_structured_value() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Verdict {
            action: String,
            issues: Vec<String>,
        }

        let cache = InMemoryCache::new();
        let verdict = Verdict {
            action: "review".to_string(),
            issues: vec!["Excessive capitalization".to_string()],
        };

        cache.set("mod:loud text", &verdict, MINUTE).await.unwrap();

        let back: Option<Verdict> = cache.get("mod:loud text").await.unwrap();
        assert_eq!(back, Some(verdict));
    }

    #[tokio::test]
    async fn test_unknown_key_misses() {
        let cache = InMemoryCache::new();

        let miss: Option<String> = cache.get("emb:never stored").await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_per_entry_ttl_expires_before_cache_ttl() {
        let cache = InMemoryCache::new();

        cache
            .set("mod:short lived", &"verdict", Duration::from_millis(40))
            .await
            .unwrap();
        assert!(cache.contains_key("mod:short lived").await.unwrap());

        tokio::time::sleep(Duration::from_millis(80)).await;

        let gone: Option<String> = cache.get("mod:short lived").await.unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn test_remove_reports_presence() {
        let cache = InMemoryCache::new();
        cache.set("emb:doomed", &1, MINUTE).await.unwrap();

        assert!(cache.remove("emb:doomed").await.unwrap());
        assert!(!cache.remove("emb:doomed").await.unwrap());
    }

    #[tokio::test]
    async fn test_capacity_bound_holds() {
        let config = InMemoryCacheConfig::default().with_max_capacity(2);
        let cache = InMemoryCache::with_config(config);

        for i in 0..10 {
            cache.set(&format!("emb:{i}"), &i, MINUTE).await.unwrap();
        }

        let count = cache.entry_count().await.unwrap();
        assert!(count <= 2, "expected at most 2 entries, got {count}");
    }

    #[tokio::test]
    async fn test_clear_drops_everything() {
        let cache = InMemoryCache::new();
        cache.set("emb:a", &1, MINUTE).await.unwrap();
        cache.set("mod:b", &2, MINUTE).await.unwrap();

        cache.clear().await.unwrap();

        assert_eq!(cache.entry_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_payload_and_deadline() {
        let cache = InMemoryCache::new();

        cache
            .set("emb:query", &vec![1.0_f32], Duration::from_millis(40))
            .await
            .unwrap();
        cache.set("emb:query", &vec![2.0_f32], MINUTE).await.unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        // The rewrite extended the deadline past the first short TTL
        let live: Option<Vec<f32>> = cache.get("emb:query").await.unwrap();
        assert_eq!(live, Some(vec![2.0]));
    }
}
