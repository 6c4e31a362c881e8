//! Embedding provider seam

use std::fmt::Debug;

use async_trait::async_trait;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// External text-embedding model behind a mockable trait.
///
/// One awaited call per text, no streaming and no batching.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Embed a single text
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    fn provider_name(&self) -> &'static str;

    fn default_model(&self) -> &'static str;

    /// Output dimensionality of a model this provider knows, if any
    fn dimensions(&self, model: &str) -> Option<usize>;
}
