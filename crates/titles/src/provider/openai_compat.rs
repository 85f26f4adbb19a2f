use std::time::Duration;

use async_trait::async_trait;
use inkwell_config::TitlesConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::{
    error::TitlesError,
    http_client::http_client,
    types::{ChatCompletionRequest, ChatMessage},
};

use super::CompletionProvider;

/// Provider speaking the OpenAI chat completions protocol (OpenRouter by default)
pub(crate) struct OpenAiCompatProvider {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    temperature: f64,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAiCompatProvider {
    pub fn new(api_key: SecretString, config: &TitlesConfig) -> Self {
        let base = config.base_url.as_str().trim_end_matches('/');

        Self {
            client: http_client(),
            endpoint: format!("{base}/chat/completions"),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        }
    }

    fn send_error(&self, e: &reqwest::Error) -> TitlesError {
        if e.is_timeout() {
            TitlesError::transport(format!("request timed out after {:?}", self.timeout))
        } else {
            TitlesError::transport(e.to_string())
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    async fn complete(&self, prompt: &str) -> crate::error::Result<Value> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            "Completion request: model={}, temperature={}, max_tokens={}",
            self.model,
            self.temperature,
            self.max_tokens,
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {e}");
                self.send_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            tracing::error!("Completion API error ({status}): {error_text}");

            return Err(TitlesError::upstream_body(
                format!("{status} returned by {}", self.endpoint),
                error_text,
            ));
        }

        let raw: Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {e}");
            TitlesError::transport(format!("invalid response body: {e}"))
        })?;

        tracing::debug!("Completion request finished");

        Ok(raw)
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }
}
