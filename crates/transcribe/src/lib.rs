#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod temp_audio;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::{MethodRouter, post},
};

pub use error::{Result, TranscribeError};
pub use request::ExtractAudio;
pub use server::Server;
pub use types::{TranscriptionRequest, TranscriptionResult};

use request::UPLOAD_LIMIT_BYTES;
use server::TranscriptionServerBuilder;

/// Build the transcription server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &inkwell_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TranscriptionServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize transcription server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for transcription
///
/// Serves `/api/transcribe/` and its slash-less form; any method other
/// than POST gets a JSON 405.
pub fn endpoint_router() -> Router<Arc<Server>> {
    let endpoint: MethodRouter<Arc<Server>> = post(transcribe).fallback(method_not_allowed);

    Router::new()
        .route("/api/transcribe/", endpoint.clone())
        .route("/api/transcribe", endpoint)
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractAudio(request): ExtractAudio,
) -> Result<Json<TranscriptionResult>> {
    tracing::debug!(
        "Transcription handler called for {} ({} bytes)",
        request.filename,
        request.audio.len()
    );

    let result = server.transcribe(request).await?;

    tracing::debug!("Transcription complete");

    Ok(Json(result))
}

async fn method_not_allowed() -> TranscribeError {
    TranscribeError::MethodNotAllowed
}
