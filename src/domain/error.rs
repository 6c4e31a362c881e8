use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Embedding unavailable: {message}")]
    EmbeddingUnavailable { message: String },

    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn embedding_unavailable(message: impl Into<String>) -> Self {
        Self::EmbeddingUnavailable {
            message: message.into(),
        }
    }

    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error came from a failed external embedding call
    pub fn is_embedding_unavailable(&self) -> bool {
        matches!(self, Self::EmbeddingUnavailable { .. })
    }

    /// Whether this error is a vector dimensionality bug
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_unavailable_error() {
        let error = DomainError::embedding_unavailable("connection refused");
        assert_eq!(
            error.to_string(),
            "Embedding unavailable: connection refused"
        );
        assert!(error.is_embedding_unavailable());
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let error = DomainError::dimension_mismatch(1536, 3072);
        assert_eq!(error.to_string(), "Dimension mismatch: 1536 vs 3072");
        assert!(error.is_dimension_mismatch());
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("text must not be empty");
        assert_eq!(error.to_string(), "Validation error: text must not be empty");
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("openai", "HTTP 429: rate limited");
        assert_eq!(
            error.to_string(),
            "Provider error: openai - HTTP 429: rate limited"
        );
    }
}
