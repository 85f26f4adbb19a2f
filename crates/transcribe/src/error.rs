use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inkwell_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Transcription failures, grouped by who has to act on them
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Endpoint was called with something other than POST
    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    /// No `audio_file` part in the request
    #[error("No audio file provided")]
    MissingAudioFile,

    /// Multipart body could not be read
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Upload exceeds the body limit
    #[error("Audio file is too large")]
    UploadTooLarge,

    /// Provider credential is not configured
    #[error("Sarvam AI API key not configured")]
    MissingCredential,

    /// Writing or reading the temporary audio file failed
    #[error("{0}")]
    TempFile(#[from] std::io::Error),

    /// Provider could not be reached
    #[error("{0}")]
    Connection(String),

    /// Provider did not answer within the configured timeout
    #[error("provider did not respond within {0:?}")]
    Timeout(std::time::Duration),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    ProviderApi { status: u16, message: String },

    /// Provider answered with a body that is not a transcript
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),

    /// Background task failed before producing a result
    #[error("{0}")]
    Internal(String),
}

impl HttpError for TranscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingAudioFile | Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Self::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MissingCredential
            | Self::TempFile(_)
            | Self::Connection(_)
            | Self::Timeout(_)
            | Self::ProviderApi { .. }
            | Self::InvalidResponse(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MethodNotAllowed
            | Self::MissingAudioFile
            | Self::InvalidUpload(_)
            | Self::UploadTooLarge
            | Self::MissingCredential => self.to_string(),
            _ => format!("Transcription failed: {self}"),
        }
    }
}

impl IntoResponse for TranscribeError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(TranscribeError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(TranscribeError::MissingAudioFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TranscribeError::UploadTooLarge.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn missing_credential_is_a_server_error() {
        let err = TranscribeError::MissingCredential;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Sarvam AI API key not configured");
    }

    #[test]
    fn provider_failures_carry_upstream_text() {
        let err = TranscribeError::ProviderApi {
            status: 403,
            message: "{\"error\":\"invalid subscription key\"}".to_owned(),
        };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.client_message(),
            "Transcription failed: provider returned 403: {\"error\":\"invalid subscription key\"}"
        );
        assert!(err.details().is_none());
    }
}
