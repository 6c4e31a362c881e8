//! Content moderation service
//!
//! Scores submitted content by combining the external classifier verdict
//! with local heuristic checks, caching verdicts by normalized content.
//! Classifier outages fail open: content is approved with an explanatory
//! message rather than blocked, and such verdicts are never cached.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::cache::{Cache, CacheExt, ContentKeyGenerator};
use crate::domain::listing::Listing;
use crate::domain::moderation::{
    ModerationAction, ModerationPolicy, ModerationProvider, ModerationRequest, ModerationVerdict,
};

const APPROVED_MESSAGE: &str = "Content approved";
const FLAGGED_REVIEW_MESSAGE: &str = "Content was flagged for manual review";
const HEURISTIC_REVIEW_MESSAGE: &str = "Content needs manual review before publishing";
const UNAVAILABLE_MESSAGE: &str =
    "Moderation service was unavailable; content approved by default";

/// Configuration for moderation scoring
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// Namespace prefix for verdict cache keys
    pub namespace: String,
    /// Classifier model (None = provider default)
    pub model: Option<String>,
    /// TTL for cached verdicts
    pub cache_ttl: Duration,
    /// Category and keyword policy
    pub policy: ModerationPolicy,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            namespace: "mod".to_string(),
            model: None,
            cache_ttl: Duration::from_secs(3600), // 1 hour
            policy: ModerationPolicy::default(),
        }
    }
}

impl ModerationConfig {
    /// Creates a new config with the given namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the classifier model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the verdict cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the moderation policy
    pub fn with_policy(mut self, policy: ModerationPolicy) -> Self {
        self.policy = policy;
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

/// Service deciding approve / review / reject for submitted content
#[derive(Debug)]
pub struct ModerationService {
    provider: Arc<dyn ModerationProvider>,
    cache: Arc<dyn Cache>,
    config: ModerationConfig,
    keys: ContentKeyGenerator,
}

impl ModerationService {
    /// Creates a new moderation service with default configuration
    pub fn new(provider: Arc<dyn ModerationProvider>, cache: Arc<dyn Cache>) -> Self {
        Self::with_config(provider, cache, ModerationConfig::default())
    }

    /// Creates a new moderation service with custom config
    pub fn with_config(
        provider: Arc<dyn ModerationProvider>,
        cache: Arc<dyn Cache>,
        config: ModerationConfig,
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
            .model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Score content and decide whether to approve, review or reject it.
    ///
    /// This never fails: classifier errors produce an approve verdict with
    /// an explanatory message instead of propagating, so a moderation
    /// outage cannot block submissions. Such verdicts are not cached and
    /// the next submission retries the classifier.
    pub async fn moderate(&self, content: &str) -> ModerationVerdict {
        let key = self.keys.generate(content);

        match self.cache.get::<ModerationVerdict>(&key).await {
            Ok(Some(verdict)) => {
                debug!("Moderation cache hit for: {}...", preview(content));
                return verdict;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Moderation cache read failed: {}", e);
            }
        }

        // The classifier sees the raw content; only the cache key is
        // normalized
        let request = ModerationRequest::new(self.model(), content);
        let response = match self.provider.moderate(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Moderation provider failed, approving by default: {}", e);
                return ModerationVerdict::new(ModerationAction::Approve, UNAVAILABLE_MESSAGE);
            }
        };

        let Some(result) = response.first() else {
            warn!("Moderation provider returned no result, approving by default");
            return ModerationVerdict::new(ModerationAction::Approve, UNAVAILABLE_MESSAGE);
        };

        let hard = self.config.policy.hard_flagged(result);
        let (mut action, mut message) = if !hard.is_empty() {
            (
                ModerationAction::Reject,
                format!("Content rejected: flagged for {}", hard.join(", ")),
            )
        } else if result.flagged() {
            (ModerationAction::Review, FLAGGED_REVIEW_MESSAGE.to_string())
        } else {
            (ModerationAction::Approve, APPROVED_MESSAGE.to_string())
        };

        // Heuristics only escalate an approve; they never override the
        // classifier's review or reject
        let findings = self.config.policy.evaluate(content);
        if !findings.is_clean() && action.is_approve() {
            action = ModerationAction::Review;
            message = HEURISTIC_REVIEW_MESSAGE.to_string();
        }

        let verdict = ModerationVerdict::new(action, message)
            .with_category_scores(result.category_scores().clone())
            .with_issues(findings.issues)
            .with_recommendations(findings.recommendations);

        if let Err(e) = self.cache.set(&key, &verdict, self.config.cache_ttl).await {
            warn!("Moderation cache write failed: {}", e);
        }

        verdict
    }

    /// Score a listing's prose fields
    pub async fn moderate_listing(&self, listing: &Listing) -> ModerationVerdict {
        self.moderate(&listing.moderation_text()).await
    }
}
