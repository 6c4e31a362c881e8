use std::time::Duration;

use serde::Deserialize;

use crate::domain::moderation::ModerationPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key; falls back to the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    #[serde(default = "default_search_cache")]
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationSettings {
    #[serde(default = "default_moderation_model")]
    pub model: String,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub policy: ModerationPolicy,
}

/// Sizing and expiry for one of the bounded caches
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_moderation_model() -> String {
    "omni-moderation-latest".to_string()
}

fn default_cache_max_entries() -> u64 {
    10_000
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

// Embeddings are stable for a given text, so they keep longer than verdicts
fn default_search_cache() -> CacheSettings {
    CacheSettings {
        max_entries: default_cache_max_entries(),
        ttl_secs: 86_400,
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            embedding_model: default_embedding_model(),
            cache: default_search_cache(),
        }
    }
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            model: default_moderation_model(),
            cache: CacheSettings::default(),
            policy: ModerationPolicy::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_cache_max_entries(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        if app_config.openai.api_key.is_none() {
            app_config.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        Ok(app_config)
    }
}
