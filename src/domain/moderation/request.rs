//! Moderation request

/// A request to classify a piece of content
#[derive(Debug, Clone)]
pub struct ModerationRequest {
    /// Model to classify with
    model: String,
    /// Content to classify
    input: String,
}

impl ModerationRequest {
    /// Create a new moderation request
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }

    /// Get the model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the input content
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_request() {
        let request = ModerationRequest::new("omni-moderation-latest", "some content");

        assert_eq!(request.model(), "omni-moderation-latest");
        assert_eq!(request.input(), "some content");
    }
}
