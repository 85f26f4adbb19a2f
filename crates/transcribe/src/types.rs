use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Audio upload taken from the `audio_file` multipart field
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename, its extension becomes the temp file suffix
    pub filename: String,
    /// Content type reported by the client
    pub content_type: String,
}

/// Transcript as returned by the provider
///
/// Every member is optional; `extra` collects whatever else the provider sends.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderTranscript {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub speaker_segments: Option<Value>,
    #[serde(default)]
    pub diarization: Option<Value>,
    #[serde(default)]
    pub words: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized transcription payload returned to the caller
#[derive(Debug, PartialEq, Serialize)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub language_code: String,
    pub model: String,
    /// Speaker-attributed segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diarization: Option<Value>,
    /// Word-level timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Value>,
    /// Remaining provider fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TranscriptionResult {
    /// Normalize a provider transcript
    ///
    /// `speaker_segments` takes precedence over `diarization`. Fields whose
    /// name starts with `_` are private to the provider and dropped.
    pub fn from_provider(transcript: ProviderTranscript, requested_model: &str) -> Self {
        let extra = transcript
            .extra
            .into_iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .collect();

        Self {
            transcript: transcript.transcript.unwrap_or_default(),
            language_code: transcript.language_code.unwrap_or_default(),
            model: transcript.model.unwrap_or_else(|| requested_model.to_owned()),
            diarization: transcript.speaker_segments.or(transcript.diarization),
            words: transcript.words,
            extra,
        }
    }
}
