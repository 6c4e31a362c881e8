//! Launchboard AI pipeline
//!
//! Semantic search and content moderation for a startup-launch directory:
//! - Embedding production through an external model, cached by normalized
//!   text key
//! - Cosine-similarity ranking of catalog listings against a query
//! - Approve / review / reject scoring of submitted content, combining an
//!   external classifier with local heuristic checks
//!
//! The HTTP routes and persistence that sit around these services belong
//! to the host application; this crate exposes handler-callable services
//! wired together by [`create_services`].

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::DomainError;
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::openai::{HttpClient, OpenAiEmbeddingProvider, OpenAiModerationProvider};
use infrastructure::services::{
    ModerationConfig, ModerationService, SemanticSearchConfig, SemanticSearchService,
};

/// The wired-up services backing request handlers
#[derive(Debug, Clone)]
pub struct Services {
    pub search: Arc<SemanticSearchService>,
    pub moderation: Arc<ModerationService>,
}

/// Build all services from configuration.
///
/// Both providers share one HTTP client; each service gets its own bounded
/// cache sized from config. Fails if no OpenAI API key is configured.
pub fn create_services(config: &AppConfig) -> Result<Services, DomainError> {
    let api_key = config
        .openai
        .api_key
        .clone()
        .ok_or_else(|| DomainError::configuration("OpenAI API key is not set"))?;

    let http_client = HttpClient::with_timeout(config.openai.timeout())?;

    let embedding_provider = Arc::new(OpenAiEmbeddingProvider::with_base_url(
        http_client.clone(),
        api_key.clone(),
        &config.openai.base_url,
    ));
    let moderation_provider = Arc::new(OpenAiModerationProvider::with_base_url(
        http_client,
        api_key,
        &config.openai.base_url,
    ));

    let embedding_cache = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.search.cache.max_entries)
            .with_default_ttl(config.search.cache.ttl()),
    ));
    let verdict_cache = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.moderation.cache.max_entries)
            .with_default_ttl(config.moderation.cache.ttl()),
    ));

    let search = Arc::new(SemanticSearchService::with_config(
        embedding_provider,
        embedding_cache,
        SemanticSearchConfig::default()
            .with_embedding_model(&config.search.embedding_model)
            .with_cache_ttl(config.search.cache.ttl()),
    ));

    let moderation = Arc::new(ModerationService::with_config(
        moderation_provider,
        verdict_cache,
        ModerationConfig::default()
            .with_model(&config.moderation.model)
            .with_cache_ttl(config.moderation.cache.ttl())
            .with_policy(config.moderation.policy.clone()),
    ));

    Ok(Services { search, moderation })
}
