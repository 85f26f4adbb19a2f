use axum::extract::{FromRequest, Multipart, Request, multipart::MultipartError};
use http::StatusCode;

use crate::{error::TranscribeError, types::TranscriptionRequest};

/// Multipart field carrying the audio upload
const AUDIO_FIELD: &str = "audio_file";

/// Body limit for audio uploads (32 MiB)
pub(crate) const UPLOAD_LIMIT_BYTES: usize = 32 << 20;

/// Extractor for the `audio_file` part of a multipart form
///
/// Requests that are not multipart, or whose form has no file under
/// `audio_file`, are rejected as a missing upload.
pub struct ExtractAudio(pub TranscriptionRequest);

impl<S> FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = TranscribeError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

        if !is_multipart {
            tracing::debug!("transcription request is not multipart/form-data");
            return Err(TranscribeError::MissingAudioFile);
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| TranscribeError::InvalidUpload(e.body_text()))?;

        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            if field.name() != Some(AUDIO_FIELD) {
                continue;
            }

            // A file input left empty is submitted with an empty filename
            let Some(filename) = field.file_name().filter(|name| !name.is_empty()).map(str::to_owned) else {
                continue;
            };

            let content_type = field.content_type().unwrap_or("application/octet-stream").to_owned();
            let audio = field.bytes().await.map_err(upload_error)?.to_vec();

            return Ok(Self(TranscriptionRequest {
                audio,
                filename,
                content_type,
            }));
        }

        tracing::debug!("multipart form has no {AUDIO_FIELD} file");

        Err(TranscribeError::MissingAudioFile)
    }
}

fn upload_error(err: MultipartError) -> TranscribeError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        TranscribeError::UploadTooLarge
    } else {
        TranscribeError::InvalidUpload(err.body_text())
    }
}
