use std::error::Error as _;

use axum::{
    body::to_bytes,
    extract::{FromRequest, Request},
};
use http_body_util::LengthLimitError;
use serde_json::error::Category;

use crate::{
    error::TitlesError,
    types::{TitleSuggestionPayload, TitleSuggestionRequest},
};

/// Body limit for title requests (1 MiB)
pub(crate) const JSON_LIMIT_BYTES: usize = 1 << 20;

/// Extractor for `{"content": "..."}` bodies
///
/// The content type header is not checked; any body that parses as JSON is
/// accepted.
pub struct ExtractTitleRequest(pub TitleSuggestionRequest);

impl<S> FromRequest<S> for ExtractTitleRequest
where
    S: Send + Sync,
{
    type Rejection = TitlesError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let body = to_bytes(request.into_body(), JSON_LIMIT_BYTES)
            .await
            .map_err(|e| body_error(&e))?;

        let payload: TitleSuggestionPayload = serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("rejecting title request body: {e}");
            match e.classify() {
                Category::Data => TitlesError::MissingContent,
                Category::Syntax | Category::Eof | Category::Io => TitlesError::InvalidJson,
            }
        })?;

        match payload.content {
            Some(content) if !content.is_empty() => Ok(Self(TitleSuggestionRequest { content })),
            _ => Err(TitlesError::MissingContent),
        }
    }
}

fn body_error(err: &axum::Error) -> TitlesError {
    let mut source = err.source();

    while let Some(inner) = source {
        if inner.is::<LengthLimitError>() {
            return TitlesError::BodyTooLarge { limit: JSON_LIMIT_BYTES };
        }
        source = inner.source();
    }

    TitlesError::Internal(format!("failed to read request body: {err}"))
}
