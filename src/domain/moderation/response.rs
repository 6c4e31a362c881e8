//! Moderation response types
//!
//! Mirrors the classifier wire shape: a response carries one result per
//! input, each with a flagged bit, per-category booleans and per-category
//! confidence scores keyed by category name.

use std::collections::HashMap;

/// Classification outcome for a single input
#[derive(Debug, Clone)]
pub struct ModerationResult {
    /// Whether the classifier flagged the content at all
    flagged: bool,
    /// Per-category violation flags
    categories: HashMap<String, bool>,
    /// Per-category confidence scores in [0, 1]
    category_scores: HashMap<String, f32>,
}

impl ModerationResult {
    /// Create a new moderation result
    pub fn new(
        flagged: bool,
        categories: HashMap<String, bool>,
        category_scores: HashMap<String, f32>,
    ) -> Self {
        Self {
            flagged,
            categories,
            category_scores,
        }
    }

    /// Whether the classifier flagged the content
    pub fn flagged(&self) -> bool {
        self.flagged
    }

    /// Get the per-category flags
    pub fn categories(&self) -> &HashMap<String, bool> {
        &self.categories
    }

    /// Get the per-category scores
    pub fn category_scores(&self) -> &HashMap<String, f32> {
        &self.category_scores
    }

    /// Category names the classifier flagged, sorted for stable output
    pub fn flagged_categories(&self) -> Vec<String> {
        let mut flagged: Vec<String> = self
            .categories
            .iter()
            .filter(|&(_, &hit)| hit)
            .map(|(name, _)| name.clone())
            .collect();
        flagged.sort();
        flagged
    }
}

/// Response from a moderation provider
#[derive(Debug, Clone)]
pub struct ModerationResponse {
    /// Model that produced the classification
    model: String,
    /// One result per input
    results: Vec<ModerationResult>,
}

impl ModerationResponse {
    /// Create a new moderation response
    pub fn new(model: impl Into<String>, results: Vec<ModerationResult>) -> Self {
        Self {
            model: model.into(),
            results,
        }
    }

    /// Get the model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get all results
    pub fn results(&self) -> &[ModerationResult] {
        &self.results
    }

    /// Get the first result, if any
    pub fn first(&self) -> Option<&ModerationResult> {
        self.results.first()
    }
}
