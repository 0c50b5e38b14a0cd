use super::types::{PredictRequest, PredictionResponse, Query};
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn predict(&self, query: &Query) -> Result<PredictionResponse>;

    /// Fetches the backend's plain-text banner from its root route.
    async fn health(&self) -> Result<String>;

    /// The address the user should check when the backend is unreachable.
    fn base_url(&self) -> &str;
}

pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig) -> Self {
        // No request timeout is set: a request that never resolves keeps the
        // in-progress notice on screen, matching the original client.
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn predict(&self, query: &Query) -> Result<PredictionResponse> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {} with {} bytes of text", url, query.text().len());

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { text: query.text() })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Error statuses are a connectivity failure; the body is ignored.
            return Err(Error::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: PredictionResponse = serde_json::from_str(&body)?;

        debug!("Decoded /predict response: {:?}", decoded);

        Ok(decoded)
    }

    async fn health(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BackendStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
