//! JSON-over-POST transport

use async_trait::async_trait;

use crate::domain::DomainError;

/// Transport seam between the providers and the network.
///
/// Providers speak JSON bodies both ways; unit tests swap in the
/// scripted mock below.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Client with a deadline covering the whole request, body included
    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let request = headers
            .into_iter()
            .fold(self.client.post(url), |request, (name, value)| {
                request.header(name, value)
            });

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::provider("http", format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies carry the API's own diagnostic, keep it
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "http",
                format!("HTTP {} from {}: {}", status, url, detail),
            ));
        }

        response.json().await.map_err(|e| {
            DomainError::provider("http", format!("Invalid JSON from {}: {}", url, e))
        })
    }
}
