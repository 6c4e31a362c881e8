//! Infrastructure services

mod moderation_service;
mod search_service;

pub use moderation_service::{ModerationConfig, ModerationService};
pub use search_service::{SemanticSearchConfig, SemanticSearchService};
