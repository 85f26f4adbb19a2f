pub(crate) mod sarvam;

use async_trait::async_trait;

use crate::{temp_audio::TempAudio, types::ProviderTranscript};

/// Speech-to-text backend
#[async_trait]
pub(crate) trait TranscriptionProvider: Send + Sync {
    /// Transcribe a saved audio file
    async fn transcribe(&self, audio: &TempAudio) -> crate::error::Result<ProviderTranscript>;

    /// Get the provider name
    fn name(&self) -> &str;
}
