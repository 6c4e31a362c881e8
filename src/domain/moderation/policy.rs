//! Moderation policy configuration
//!
//! Holds the category and keyword lists the scorer applies. Everything here
//! is plain configuration data so deployments can tune the lists without a
//! rebuild.

use super::ModerationResult;
use serde::{Deserialize, Serialize};

/// Locally derived findings from heuristic checks
#[derive(Debug, Clone, Default)]
pub struct HeuristicFindings {
    /// Human-readable problems found in the content
    pub issues: Vec<String>,
    /// Matching suggestions for fixing each problem
    pub recommendations: Vec<String>,
}

impl HeuristicFindings {
    /// Whether no heuristic fired
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, issue: impl Into<String>, recommendation: impl Into<String>) {
        self.issues.push(issue.into());
        self.recommendations.push(recommendation.into());
    }
}

/// Configuration for moderation scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationPolicy {
    /// Categories that force a reject when the classifier flags them
    #[serde(default = "default_reject_categories")]
    pub reject_categories: Vec<String>,
    /// Exclamation marks allowed before the content reads as shouting
    #[serde(default = "default_max_exclamations")]
    pub max_exclamations: usize,
    /// Uppercase-to-letter ratio allowed before the content reads as shouting
    #[serde(default = "default_max_caps_ratio")]
    pub max_caps_ratio: f32,
    /// Words matched case-insensitively as profanity
    #[serde(default)]
    pub profanity: Vec<String>,
    /// Phrases matched case-insensitively as spam
    #[serde(default = "default_spam_phrases")]
    pub spam_phrases: Vec<String>,
}

fn default_reject_categories() -> Vec<String> {
    vec![
        "hate".to_string(),
        "self-harm".to_string(),
        "sexual".to_string(),
        "violence".to_string(),
    ]
}

fn default_max_exclamations() -> usize {
    3
}

fn default_max_caps_ratio() -> f32 {
    0.7
}

fn default_spam_phrases() -> Vec<String> {
    vec![
        "buy now".to_string(),
        "limited time".to_string(),
        "act fast".to_string(),
        "click here".to_string(),
        "guaranteed success".to_string(),
    ]
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            reject_categories: default_reject_categories(),
            max_exclamations: default_max_exclamations(),
            max_caps_ratio: default_max_caps_ratio(),
            profanity: Vec::new(),
            spam_phrases: default_spam_phrases(),
        }
    }
}

impl ModerationPolicy {
    /// Create a new policy with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hard-reject categories
    pub fn with_reject_categories(mut self, categories: Vec<String>) -> Self {
        self.reject_categories = categories;
        self
    }

    /// Set the exclamation mark limit
    pub fn with_max_exclamations(mut self, max: usize) -> Self {
        self.max_exclamations = max;
        self
    }

    /// Set the capitalization ratio limit
    pub fn with_max_caps_ratio(mut self, ratio: f32) -> Self {
        self.max_caps_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the profanity word list
    pub fn with_profanity(mut self, words: Vec<String>) -> Self {
        self.profanity = words;
        self
    }

    /// Set the spam phrase list
    pub fn with_spam_phrases(mut self, phrases: Vec<String>) -> Self {
        self.spam_phrases = phrases;
        self
    }

    /// Hard-reject categories the classifier flagged in this result
    pub fn hard_flagged(&self, result: &ModerationResult) -> Vec<String> {
        let mut hits: Vec<String> = self
            .reject_categories
            .iter()
            .filter(|name| result.categories().get(name.as_str()).copied().unwrap_or(false))
            .cloned()
            .collect();
        hits.sort();
        hits
    }

    /// Run the local heuristic checks over the content
    pub fn evaluate(&self, content: &str) -> HeuristicFindings {
        let mut findings = HeuristicFindings::default();

        let exclamations = content.matches('!').count();
        if exclamations > self.max_exclamations {
            findings.push(
                format!("Too many exclamation marks ({exclamations})"),
                "Reduce the promotional tone and use at most a few exclamation marks",
            );
        }

        let letters = content.chars().filter(|c| c.is_alphabetic()).count();
        if letters > 0 {
            let uppercase = content.chars().filter(|c| c.is_uppercase()).count();
            let ratio = uppercase as f32 / letters as f32;
            if ratio > self.max_caps_ratio {
                findings.push(
                    "Excessive capitalization",
                    "Write in sentence case instead of all caps",
                );
            }
        }

        let lowered = content.to_lowercase();

        let profane: Vec<&str> = self
            .profanity
            .iter()
            .filter(|word| lowered.contains(word.to_lowercase().as_str()))
            .map(|word| word.as_str())
            .collect();
        if !profane.is_empty() {
            findings.push(
                format!("Contains inappropriate language: {}", profane.join(", ")),
                "Remove the flagged words",
            );
        }

        let spam: Vec<&str> = self
            .spam_phrases
            .iter()
            .filter(|phrase| lowered.contains(phrase.to_lowercase().as_str()))
            .map(|phrase| phrase.as_str())
            .collect();
        if !spam.is_empty() {
            findings.push(
                format!("Contains spam-like phrases: {}", spam.join(", ")),
                "Describe what the product does instead of using sales phrases",
            );
        }

        findings
    }
}
