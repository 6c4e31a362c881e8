//! Embedding response types

use super::similarity::cosine_similarity;
use crate::domain::DomainError;

/// One embedding vector, positioned by its index in the response
#[derive(Debug, Clone)]
pub struct Embedding {
    index: usize,
    values: Vec<f32>,
}

impl Embedding {
    pub fn new(index: usize, values: Vec<f32>) -> Self {
        Self { index, values }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vector(&self) -> &[f32] {
        &self.values
    }

    /// Vector length; fixed per model
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn into_vector(self) -> Vec<f32> {
        self.values
    }

    /// Cosine similarity against another embedding of the same model
    pub fn cosine_similarity(&self, other: &Embedding) -> Result<f32, DomainError> {
        cosine_similarity(&self.values, &other.values)
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy)]
pub struct EmbeddingUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}

impl EmbeddingUsage {
    pub fn new(prompt_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            total_tokens,
        }
    }

    pub fn prompt_tokens(&self) -> u32 {
        self.prompt_tokens
    }

    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }
}

/// Provider answer to an [`super::EmbeddingRequest`]
#[derive(Debug, Clone)]
pub struct EmbeddingResponse {
    model: String,
    embeddings: Vec<Embedding>,
    usage: EmbeddingUsage,
}

impl EmbeddingResponse {
    pub fn new(
        model: impl Into<String>,
        embeddings: Vec<Embedding>,
        usage: EmbeddingUsage,
    ) -> Self {
        Self {
            model: model.into(),
            embeddings,
            usage,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }

    /// First embedding; single-input requests return exactly one
    pub fn first(&self) -> Option<&Embedding> {
        self.embeddings.first()
    }

    pub fn usage(&self) -> &EmbeddingUsage {
        &self.usage
    }

    /// Unwrap the response into its first vector
    pub fn into_first_vector(self) -> Option<Vec<f32>> {
        self.embeddings.into_iter().next().map(Embedding::into_vector)
    }
}
