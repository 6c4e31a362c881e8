//! OpenAI API integration
//!
//! HTTP plumbing plus the embedding and moderation providers that talk to
//! the OpenAI REST API.

mod embeddings;
mod http_client;
mod moderation;

pub use embeddings::OpenAiEmbeddingProvider;
pub use http_client::{HttpClient, HttpClientTrait};
pub use moderation::OpenAiModerationProvider;

#[cfg(test)]
pub use http_client::mock::MockHttpClient;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Header pair every OpenAI endpoint takes
fn auth_headers(bearer: &str) -> Vec<(&str, &str)> {
    vec![
        ("Authorization", bearer),
        ("Content-Type", "application/json"),
    ]
}
