use std::time::Duration;

use async_trait::async_trait;
use inkwell_config::TranscriptionConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TranscribeError,
    http_client::http_client,
    temp_audio::TempAudio,
    types::ProviderTranscript,
};

use super::TranscriptionProvider;

/// Header carrying the Sarvam subscription key
const SUBSCRIPTION_KEY_HEADER: &str = "api-subscription-key";

/// Sarvam AI speech-to-text provider
pub(crate) struct SarvamProvider {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    language_code: String,
    timeout: Duration,
}

impl SarvamProvider {
    pub fn new(api_key: SecretString, config: &TranscriptionConfig) -> Self {
        let base = config.base_url.as_str().trim_end_matches('/');

        Self {
            client: http_client(),
            endpoint: format!("{base}/speech-to-text"),
            api_key,
            model: config.model.clone(),
            language_code: config.language_code.clone(),
            timeout: config.timeout,
        }
    }

    fn send_error(&self, e: &reqwest::Error) -> TranscribeError {
        if e.is_timeout() {
            TranscribeError::Timeout(self.timeout)
        } else {
            TranscribeError::Connection(format!("Failed to send request to Sarvam AI: {e}"))
        }
    }
}

#[async_trait]
impl TranscriptionProvider for SarvamProvider {
    async fn transcribe(&self, audio: &TempAudio) -> crate::error::Result<ProviderTranscript> {
        let bytes = audio.read().await?;

        tracing::debug!(
            "Sarvam transcription request: {} bytes, model={}, language_code={}",
            bytes.len(),
            self.model,
            self.language_code,
        );

        let file = reqwest::multipart::Part::bytes(bytes)
            .file_name(audio.filename().to_owned())
            .mime_str(audio.content_type())
            .map_err(|e| TranscribeError::InvalidUpload(format!("Invalid content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("language_code", self.language_code.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, self.api_key.expose_secret())
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Sarvam request failed: {e}");
                self.send_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Sarvam API error ({status}): {error_text}");

            return Err(TranscribeError::ProviderApi {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let transcript: ProviderTranscript = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Sarvam response: {e}");
            if e.is_timeout() {
                TranscribeError::Timeout(self.timeout)
            } else {
                TranscribeError::InvalidResponse(e.to_string())
            }
        })?;

        tracing::debug!("Sarvam transcription complete");

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "sarvam"
    }
}
