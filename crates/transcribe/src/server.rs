use std::path::PathBuf;

use crate::{
    error::TranscribeError,
    provider::{TranscriptionProvider, sarvam::SarvamProvider},
    temp_audio::TempAudio,
    types::{TranscriptionRequest, TranscriptionResult},
};

/// Transcription service shared by every request
pub struct Server {
    /// `None` while the provider credential is unset
    provider: Option<Box<dyn TranscriptionProvider>>,
    temp_dir: Option<PathBuf>,
    model: String,
}

impl Server {
    /// Save the upload, transcribe it and normalize the provider response
    ///
    /// The temporary file is removed before returning, whatever the outcome.
    pub(crate) async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> crate::error::Result<TranscriptionResult> {
        let Some(provider) = self.provider.as_deref() else {
            tracing::warn!("transcription requested but no API key is configured");
            return Err(TranscribeError::MissingCredential);
        };

        let audio = TempAudio::persist(request, self.temp_dir.as_deref()).await?;

        tracing::debug!(provider = provider.name(), "sending audio for transcription");

        let outcome = provider.transcribe(&audio).await;
        audio.remove();

        let transcript = outcome?;

        Ok(TranscriptionResult::from_provider(transcript, &self.model))
    }
}

/// Builder for constructing the transcription server from configuration
pub(crate) struct TranscriptionServerBuilder<'a> {
    config: &'a inkwell_config::Config,
}

impl<'a> TranscriptionServerBuilder<'a> {
    pub fn new(config: &'a inkwell_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let config = &self.config.transcription;

        if let Some(dir) = &config.temp_dir
            && !dir.is_dir()
        {
            return Err(TranscribeError::Internal(format!(
                "transcription.temp_dir '{}' is not a directory",
                dir.display()
            )));
        }

        let provider = config.api_key.clone().map(|api_key| {
            tracing::debug!("Initializing Sarvam transcription provider");
            Box::new(SarvamProvider::new(api_key, config)) as Box<dyn TranscriptionProvider>
        });

        if provider.is_none() {
            tracing::debug!("No transcription credential configured");
        }

        Ok(Server {
            provider,
            temp_dir: config.temp_dir.clone(),
            model: config.model.clone(),
        })
    }
}
