//! Moderations endpoint of the OpenAI API

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use super::{DEFAULT_OPENAI_BASE_URL, HttpClientTrait, auth_headers};
use crate::domain::DomainError;
use crate::domain::moderation::{
    ModerationProvider, ModerationRequest, ModerationResponse, ModerationResult,
};

/// [`ModerationProvider`] backed by `POST /v1/moderations`
#[derive(Debug)]
pub struct OpenAiModerationProvider<C: HttpClientTrait> {
    client: C,
    bearer: String,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiModerationProvider<C> {
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
        format!("{}/v1/moderations", self.base_url)
    }
}

fn request_body(request: &ModerationRequest) -> serde_json::Value {
    serde_json::json!({
        "model": request.model(),
        "input": request.input(),
    })
}

fn decode_response(json: serde_json::Value) -> Result<ModerationResponse, DomainError> {
    serde_json::from_value::<ModerationsApiResponse>(json)
        .map(ModerationsApiResponse::into_domain)
        .map_err(|e| {
            DomainError::provider("openai", format!("Undecodable moderations payload: {}", e))
        })
}

#[async_trait]
impl<C: HttpClientTrait> ModerationProvider for OpenAiModerationProvider<C> {
    async fn moderate(
        &self,
        request: ModerationRequest,
    ) -> Result<ModerationResponse, DomainError> {
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
        "omni-moderation-latest"
    }
}

// Wire format of /v1/moderations

#[derive(Debug, Deserialize)]
struct ModerationsApiResponse {
    model: String,
    results: Vec<ModerationsApiResult>,
}

#[derive(Debug, Deserialize)]
struct ModerationsApiResult {
    flagged: bool,
    #[serde(default)]
    categories: HashMap<String, bool>,
    #[serde(default)]
    category_scores: HashMap<String, f32>,
}

impl ModerationsApiResponse {
    fn into_domain(self) -> ModerationResponse {
        let results = self
            .results
            .into_iter()
            .map(|row| ModerationResult::new(row.flagged, row.categories, row.category_scores))
            .collect();

        ModerationResponse::new(self.model, results)
    }
}

#[cfg(test)]
mod tests {
    use super::super::MockHttpClient;
    use super::*;

    const ENDPOINT: &str = "https://api.openai.com/v1/moderations";

    /// Per-category scores; a category counts as hit at 0.5 and above
    fn moderations_payload(flagged: bool, scores: &[(&str, f32)]) -> serde_json::Value {
        let mut category_map = serde_json::Map::new();
        let mut score_map = serde_json::Map::new();
        for (name, score) in scores {
            category_map.insert(name.to_string(), serde_json::json!(*score >= 0.5));
            score_map.insert(name.to_string(), serde_json::json!(score));
        }

        serde_json::json!({
            "id": "modr-af13",
            "model": "omni-moderation-latest",
            "results": [{
                "flagged": flagged,
                "categories": category_map,
                "category_scores": score_map,
            }]
        })
    }

    #[tokio::test]
    async fn test_clean_text_passes() {
        let payload = moderations_payload(false, &[("hate", 0.001), ("violence", 0.002)]);
        let client = MockHttpClient::new().with_response(ENDPOINT, payload);
        let provider = OpenAiModerationProvider::new(client, "sk-test");

        let response = provider
            .moderate(ModerationRequest::new(
                "omni-moderation-latest",
                "A friendly product description",
            ))
            .await
            .unwrap();

        assert_eq!(response.model(), "omni-moderation-latest");
        let result = response.first().unwrap();
        assert!(!result.flagged());
        assert!(result.flagged_categories().is_empty());
        assert!(result.category_scores().contains_key("hate"));
    }

    #[tokio::test]
    async fn test_flagged_text_reports_hit_categories() {
        let payload = moderations_payload(true, &[("hate", 0.98), ("violence", 0.01)]);
        let client = MockHttpClient::new().with_response(ENDPOINT, payload);
        let provider = OpenAiModerationProvider::new(client, "sk-test");

        let response = provider
            .moderate(ModerationRequest::new("omni-moderation-latest", "hostile"))
            .await
            .unwrap();

        let result = response.first().unwrap();
        assert!(result.flagged());
        assert_eq!(result.flagged_categories(), vec!["hate"]);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let client = MockHttpClient::new().with_error(ENDPOINT, "HTTP 401 from upstream");
        let provider = OpenAiModerationProvider::new(client, "sk-test");

        let result = provider
            .moderate(ModerationRequest::new("omni-moderation-latest", "text"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_base_url_override_and_trailing_slash() {
        let client = MockHttpClient::new().with_response(
            "http://127.0.0.1:9009/v1/moderations",
            moderations_payload(false, &[]),
        );
        let provider =
            OpenAiModerationProvider::with_base_url(client, "sk-test", "http://127.0.0.1:9009/");

        let response = provider
            .moderate(ModerationRequest::new("omni-moderation-latest", "text"))
            .await
            .unwrap();

        assert!(response.first().is_some());
    }

    #[tokio::test]
    async fn test_score_maps_default_to_empty() {
        let client = MockHttpClient::new().with_response(
            ENDPOINT,
            serde_json::json!({
                "model": "omni-moderation-latest",
                "results": [{"flagged": false}]
            }),
        );
        let provider = OpenAiModerationProvider::new(client, "sk-test");

        let response = provider
            .moderate(ModerationRequest::new("omni-moderation-latest", "text"))
            .await
            .unwrap();

        let result = response.first().unwrap();
        assert!(!result.flagged());
        assert!(result.categories().is_empty());
        assert!(result.category_scores().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_provider_error() {
        let client =
            MockHttpClient::new().with_response(ENDPOINT, serde_json::json!({"results": 7}));
        let provider = OpenAiModerationProvider::new(client, "sk-test");

        let result = provider
            .moderate(ModerationRequest::new("omni-moderation-latest", "text"))
            .await;

        assert!(result.unwrap_err().to_string().contains("Undecodable"));
    }

    #[test]
    fn test_provider_identity() {
        let provider = OpenAiModerationProvider::new(MockHttpClient::new(), "sk-test");

        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.default_model(), "omni-moderation-latest");
    }
}
