use super::types::{InferenceError, InferencePayload};
use crate::config::InferenceConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// One blocking generation attempt for an already-rendered prompt. No
    /// retries, no backoff; the caller sees exactly one outcome per call.
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Client for a hosted text-generation endpoint speaking the
/// `{"inputs": ...}` / `[{"generated_text": ...}]` convention.
pub struct HostedModelClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    pacing_delay: Duration,
}

impl HostedModelClient {
    pub fn new(config: InferenceConfig) -> Self {
        let endpoint = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: config.api_key,
            pacing_delay: Duration::from_millis(config.pacing_delay_ms),
        }
    }
}

#[async_trait]
impl InferenceClient for HostedModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        debug!("Requesting generation from {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&InferencePayload { inputs: prompt })
            .send()
            .await
            .map_err(|e| {
                warn!("Inference request did not reach the endpoint: {}", e);
                InferenceError::Network(e.to_string())
            })?;

        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        let status = response.status();
        if !status.is_success() {
            warn!("Inference endpoint returned status {}", status.as_u16());
            return Err(InferenceError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let value: Value =
            serde_json::from_str(&body).map_err(|_| InferenceError::InvalidBody)?;

        // The success shape is a JSON array of candidates; any other JSON
        // counts as an absent candidate list, not a parse failure.
        let candidates = match value.as_array() {
            Some(items) if !items.is_empty() => items,
            _ => return Err(InferenceError::EmptyCandidates),
        };

        candidates[0]
            .get("generated_text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(InferenceError::MissingField)
    }
}
