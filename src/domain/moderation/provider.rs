//! Moderation provider trait

use super::{ModerationRequest, ModerationResponse};
use crate::domain::error::DomainError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for content moderation providers
#[async_trait]
pub trait ModerationProvider: Send + Sync + Debug {
    /// Classify content against the provider's category taxonomy
    async fn moderate(&self, request: ModerationRequest)
    -> Result<ModerationResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the default model for this provider
    fn default_model(&self) -> &'static str;
}
