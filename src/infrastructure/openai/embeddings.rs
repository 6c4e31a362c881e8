//! Embeddings endpoint of the OpenAI API

use async_trait::async_trait;
use serde::Deserialize;

use super::{DEFAULT_OPENAI_BASE_URL, HttpClientTrait, auth_headers};
use crate::domain::DomainError;
use crate::domain::embedding::{
    Embedding, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
};

/// Embedding models OpenAI serves, with their native output widths
const EMBEDDING_MODELS: &[(&str, usize)] = &[
    ("text-embedding-3-small", 1536),
    ("text-embedding-3-large", 3072),
    ("text-embedding-ada-002", 1536),
];

/// [`EmbeddingProvider`] backed by `POST /v1/embeddings`
#[derive(Debug)]
pub struct OpenAiEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    bearer: String,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiEmbeddingProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    /// Point the provider at a different host, e.g. a local test server
    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bearer: format!("Bearer {}", api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }
}

fn request_body(request: &EmbeddingRequest) -> serde_json::Value {
    match request.dimensions() {
        Some(dimensions) => serde_json::json!({
            "model": request.model(),
            "input": request.input(),
            "dimensions": dimensions,
        }),
        None => serde_json::json!({
            "model": request.model(),
            "input": request.input(),
        }),
    }
}

fn decode_response(json: serde_json::Value) -> Result<EmbeddingResponse, DomainError> {
    serde_json::from_value::<EmbeddingsApiResponse>(json)
        .map(EmbeddingsApiResponse::into_domain)
        .map_err(|e| {
            DomainError::provider("openai", format!("Undecodable embeddings payload: {}", e))
        })
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OpenAiEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let json = self
            .client
            .post_json(
                &self.endpoint(),
                auth_headers(&self.bearer),
                &request_body(&request),
            )
            .await?;

        decode_response(json)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &'static str {
        "text-embedding-3-small"
    }

    fn dimensions(&self, model: &str) -> Option<usize> {
        EMBEDDING_MODELS
            .iter()
            .find_map(|(name, width)| (*name == model).then_some(*width))
    }
}

// Wire format of /v1/embeddings

#[derive(Debug, Deserialize)]
struct EmbeddingsApiResponse {
    model: String,
    data: Vec<EmbeddingsApiRow>,
    usage: EmbeddingsApiUsage,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsApiRow {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsApiUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}

impl EmbeddingsApiResponse {
    fn into_domain(self) -> EmbeddingResponse {
        let embeddings = self
            .data
            .into_iter()
            .map(|row| Embedding::new(row.index, row.embedding))
            .collect();
        let usage = EmbeddingUsage::new(self.usage.prompt_tokens, self.usage.total_tokens);

        EmbeddingResponse::new(self.model, embeddings, usage)
    }
}
