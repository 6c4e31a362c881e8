//! Embedding request

/// One text to embed with a given model.
///
/// Providers receive the text exactly as submitted; key normalization is
/// a caching concern and happens elsewhere.
#[derive(Debug, Clone)]
pub struct EmbeddingRequest {
    model: String,
    input: String,
    dimensions: Option<usize>,
}

impl EmbeddingRequest {
    /// Request an embedding of `input` from `model`
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            dimensions: None,
        }
    }

    /// Ask for a reduced output dimensionality (models that support it)
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_text_verbatim() {
        let request = EmbeddingRequest::new("text-embedding-3-small", "  Launch Fast  ");

        assert_eq!(request.input(), "  Launch Fast  ");
        assert_eq!(request.model(), "text-embedding-3-small");
        assert!(request.dimensions().is_none());
    }

    #[test]
    fn test_reduced_dimensions_are_opt_in() {
        let request = EmbeddingRequest::new("text-embedding-3-large", "query").with_dimensions(512);

        assert_eq!(request.dimensions(), Some(512));
    }
}
