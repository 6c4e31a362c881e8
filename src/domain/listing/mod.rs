//! Directory listing domain model
//!
//! A listing is a submitted project entry in the launch directory. The
//! pipeline only cares about its textual projections and its optional
//! precomputed embedding; storage and CRUD belong to the database layer.

use serde::{Deserialize, Serialize};

/// A project listing in the directory catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Identifier assigned by the storage layer
    id: String,
    /// Project name
    name: String,
    /// Short one-line pitch
    #[serde(skip_serializing_if = "Option::is_none")]
    tagline: Option<String>,
    /// Longer free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Directory category
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    /// Free-form tags
    #[serde(default)]
    tags: Vec<String>,
    /// Precomputed embedding of the search projection, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    embedding: Option<Vec<f32>>,
}

impl Listing {
    /// Create a new listing
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tagline: None,
            description: None,
            category: None,
            tags: Vec::new(),
            embedding: None,
        }
    }

    /// Set the tagline
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the precomputed embedding
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Get the listing ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tagline
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    /// Get the description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the tags
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Get the precomputed embedding
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// Whether this listing carries a precomputed embedding
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }

    /// Textual projection used for similarity search: name, description,
    /// tagline, category and tags concatenated, trimmed.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name.as_str()];

        if let Some(description) = self.description.as_deref() {
            parts.push(description);
        }
        if let Some(tagline) = self.tagline.as_deref() {
            parts.push(tagline);
        }
        if let Some(category) = self.category.as_deref() {
            parts.push(category);
        }
        for tag in &self.tags {
            parts.push(tag.as_str());
        }

        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Free-text projection submitted for moderation: name, tagline and
    /// description (the fields users write prose into).
    pub fn moderation_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name.as_str()];

        if let Some(tagline) = self.tagline.as_deref() {
            parts.push(tagline);
        }
        if let Some(description) = self.description.as_deref() {
            parts.push(description);
        }

        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A listing augmented with its similarity score for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    /// The scored listing
    pub listing: Listing,
    /// Cosine similarity to the query, 0 when the listing has no embedding
    pub similarity: f32,
}

impl ScoredListing {
    /// Create a new scored listing
    pub fn new(listing: Listing, similarity: f32) -> Self {
        Self {
            listing,
            similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_builder() {
        let listing = Listing::new("lst-1", "Acme")
            .with_tagline("Ship faster")
            .with_description("Deployment tooling for startups")
            .with_category("devtools")
            .with_tags(vec!["ci".into(), "deploy".into()])
            .with_embedding(vec![0.1, 0.2]);

        assert_eq!(listing.id(), "lst-1");
        assert_eq!(listing.name(), "Acme");
        assert_eq!(listing.tagline(), Some("Ship faster"));
        assert_eq!(listing.category(), Some("devtools"));
        assert_eq!(listing.tags().len(), 2);
        assert!(listing.has_embedding());
    }

    #[test]
    fn test_search_text_projection_order() {
        let listing = Listing::new("lst-1", "Acme")
            .with_tagline("Ship faster")
            .with_description("Deployment tooling")
            .with_category("devtools")
            .with_tags(vec!["ci".into(), "deploy".into()]);

        assert_eq!(
            listing.search_text(),
            "Acme Deployment tooling Ship faster devtools ci deploy"
        );
    }

    #[test]
    fn test_search_text_skips_missing_fields() {
        let listing = Listing::new("lst-1", "Acme");

        assert_eq!(listing.search_text(), "Acme");
    }

    #[test]
    fn test_search_text_empty_when_all_fields_blank() {
        let listing = Listing::new("lst-1", "   ")
            .with_description("  ")
            .with_tags(vec!["".into()]);

        assert_eq!(listing.search_text(), "");
    }

    #[test]
    fn test_moderation_text_uses_prose_fields_only() {
        let listing = Listing::new("lst-1", "Acme")
            .with_tagline("Ship faster")
            .with_description("Deployment tooling")
            .with_category("devtools")
            .with_tags(vec!["spammy-tag".into()]);

        assert_eq!(
            listing.moderation_text(),
            "Acme\nShip faster\nDeployment tooling"
        );
    }

    #[test]
    fn test_listing_roundtrips_through_json() {
        let listing = Listing::new("lst-1", "Acme").with_embedding(vec![0.5, -0.25]);

        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), "lst-1");
        assert_eq!(back.embedding(), Some(&[0.5, -0.25][..]));
    }
}
