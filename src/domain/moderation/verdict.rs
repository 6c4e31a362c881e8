//! Moderation verdict types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Terminal decision for a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    /// Content is acceptable and can be published
    Approve,
    /// Content needs a human look before publishing
    Review,
    /// Content violates policy and is blocked
    Reject,
}

impl ModerationAction {
    /// Check if this action publishes the content
    pub fn is_approve(&self) -> bool {
        matches!(self, Self::Approve)
    }

    /// Check if this action queues the content for a human
    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }

    /// Check if this action blocks the content
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// Full moderation outcome: the action plus its supporting evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Decided action
    action: ModerationAction,
    /// Human-readable explanation of the decision
    message: String,
    /// Per-category confidence scores from the classifier
    #[serde(default)]
    category_scores: HashMap<String, f32>,
    /// Locally derived problems
    #[serde(default)]
    issues: Vec<String>,
    /// Matching suggestions for each problem
    #[serde(default)]
    recommendations: Vec<String>,
}

impl ModerationVerdict {
    /// Create a new verdict
    pub fn new(action: ModerationAction, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
            category_scores: HashMap::new(),
            issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Attach classifier category scores
    pub fn with_category_scores(mut self, scores: HashMap<String, f32>) -> Self {
        self.category_scores = scores;
        self
    }

    /// Attach locally derived issues
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = issues;
        self
    }

    /// Attach recommendations matching the issues
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Get the action
    pub fn action(&self) -> ModerationAction {
        self.action
    }

    /// Get the explanation
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the classifier scores
    pub fn category_scores(&self) -> &HashMap<String, f32> {
        &self.category_scores
    }

    /// Get the issues
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Get the recommendations
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}
