//! Domain layer - Search, moderation and caching models

pub mod cache;
pub mod embedding;
pub mod error;
pub mod listing;
pub mod moderation;

pub use cache::{Cache, CacheExt, ContentKeyGenerator, normalize_content};
pub use embedding::{
    Embedding, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
    cosine_similarity,
};
pub use error::DomainError;
pub use listing::{Listing, ScoredListing};
pub use moderation::{
    HeuristicFindings, ModerationAction, ModerationPolicy, ModerationProvider, ModerationRequest,
    ModerationResponse, ModerationResult, ModerationVerdict,
};
