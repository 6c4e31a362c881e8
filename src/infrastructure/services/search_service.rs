//! Semantic search service
//!
//! Produces embeddings through an external provider with a normalized-key
//! cache in front, and ranks catalog listings against a query by cosine
//! similarity.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheExt, ContentKeyGenerator};
use crate::domain::embedding::{EmbeddingProvider, EmbeddingRequest, cosine_similarity};
use crate::domain::listing::{Listing, ScoredListing};

/// Configuration for semantic search
#[derive(Debug, Clone)]
pub struct SemanticSearchConfig {
    /// Namespace prefix for embedding cache keys
    pub namespace: String,
    /// Model for query and listing embeddings (None = provider default)
    pub embedding_model: Option<String>,
    /// TTL for cached embeddings
    pub cache_ttl: Duration,
}

impl Default for SemanticSearchConfig {
    fn default() -> Self {
        Self {
            namespace: "emb".to_string(),
            embedding_model: None,
            cache_ttl: Duration::from_secs(24 * 3600), // 24 hours
        }
    }
}

impl SemanticSearchConfig {
    /// Creates a new config with the given namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(model.into());
        self
    }

    /// Sets the embedding cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// First 50 characters of a text, for log lines
fn preview(text: &str) -> &str {
    match text.char_indices().nth(50) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Service producing embeddings and ranking listings by similarity
#[derive(Debug)]
pub struct SemanticSearchService {
    provider: Arc<dyn EmbeddingProvider>,
    cache: Arc<dyn Cache>,
    config: SemanticSearchConfig,
    keys: ContentKeyGenerator,
}

impl SemanticSearchService {
    /// Creates a new search service with default configuration
    pub fn new(provider: Arc<dyn EmbeddingProvider>, cache: Arc<dyn Cache>) -> Self {
        Self::with_config(provider, cache, SemanticSearchConfig::default())
    }

    /// Creates a new search service with custom config
    pub fn with_config(
        provider: Arc<dyn EmbeddingProvider>,
        cache: Arc<dyn Cache>,
        config: SemanticSearchConfig,
    ) -> Self {
        let keys = ContentKeyGenerator::new(&config.namespace);
        Self {
            provider,
            cache,
            config,
            keys,
        }
    }

    fn model(&self) -> &str {
        self.config
            .embedding_model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Produce an embedding for the given text, consulting the cache first.
    ///
    /// Equivalent texts (same after trimming and case folding) share one
    /// cache entry, so repeated submissions cost one provider call total.
    /// Cache failures degrade to a provider call instead of failing the
    /// operation; provider failures surface as `EmbeddingUnavailable`.
    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("Cannot embed empty text"));
        }

        let key = self.keys.generate(text);

        match self.cache.get::<Vec<f32>>(&key).await {
            Ok(Some(vector)) => {
                debug!("Embedding cache hit for: {}...", preview(text));
                return Ok(vector);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Embedding cache read failed: {}", e);
            }
        }

        // The provider sees the raw text; only the cache key is normalized
        let request = EmbeddingRequest::new(self.model(), text);
        let response = self
            .provider
            .embed(request)
            .await
            .map_err(|e| DomainError::embedding_unavailable(e.to_string()))?;

        let vector = response
            .into_first_vector()
            .ok_or_else(|| DomainError::embedding_unavailable("Provider returned no embedding"))?;

        if let Err(e) = self.cache.set(&key, &vector, self.config.cache_ttl).await {
            warn!("Embedding cache write failed: {}", e);
        }

        Ok(vector)
    }

    /// Produce an embedding for a listing's search projection
    pub async fn embed_listing(&self, listing: &Listing) -> Result<Vec<f32>, DomainError> {
        self.embed_text(&listing.search_text()).await
    }

    /// Rank listings against a query by cosine similarity.
    ///
    /// Listings without a precomputed embedding (or with an empty search
    /// projection) score 0 rather than failing the search. The sort is
    /// stable so equally scored listings keep their input order.
    pub async fn search(
        &self,
        query: &str,
        listings: Vec<Listing>,
        limit: usize,
    ) -> Result<Vec<ScoredListing>, DomainError> {
        let query_embedding = self.embed_text(query).await?;

        let mut scored = Vec::with_capacity(listings.len());
        for listing in listings {
            let similarity = match listing.embedding() {
                Some(embedding) if !listing.search_text().is_empty() => {
                    cosine_similarity(&query_embedding, embedding)?
                }
                _ => 0.0,
            };
            scored.push(ScoredListing::new(listing, similarity));
        }

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(limit);

        debug!(
            results = scored.len(),
            "Semantic search for: {}...",
            preview(query)
        );

        Ok(scored)
    }
}
