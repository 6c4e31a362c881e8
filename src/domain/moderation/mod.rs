//! Content moderation domain types
//!
//! Combines an external classifier verdict with local heuristic checks into
//! a single approve / review / reject decision.

mod policy;
mod provider;
mod request;
mod response;
mod verdict;

pub use policy::{HeuristicFindings, ModerationPolicy};
pub use provider::ModerationProvider;
pub use request::ModerationRequest;
pub use response::{ModerationResponse, ModerationResult};
pub use verdict::{ModerationAction, ModerationVerdict};

#[cfg(test)]
pub use provider::mock::MockModerationProvider;
