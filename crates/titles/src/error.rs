use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inkwell_core::HttpError;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TitlesError>;

/// Title suggestion failures, grouped by who has to act on them
#[derive(Debug, Error)]
pub enum TitlesError {
    /// Endpoint was called with something other than POST
    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    /// Body is not valid JSON
    #[error("Invalid JSON format")]
    InvalidJson,

    /// `content` is missing, empty or not a string
    #[error("Blog content is required")]
    MissingContent,

    /// Body exceeds the size limit
    #[error("Request body is too large, limit is {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Provider credential is not configured
    #[error("OpenRouter API key not configured")]
    MissingCredential,

    /// Provider unreachable, timed out, or answered with an error
    ///
    /// `details` is the provider's error body as JSON, its raw text, or an
    /// empty string when there was no response at all.
    #[error("{message}")]
    Upstream { message: String, details: Value },

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl TitlesError {
    /// Upstream failure that never produced a response body
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            details: Value::String(String::new()),
        }
    }

    /// Upstream failure with the provider's error body
    pub(crate) fn upstream_body(message: impl Into<String>, body: String) -> Self {
        let details = serde_json::from_str(&body).unwrap_or(Value::String(body));

        Self::Upstream {
            message: message.into(),
            details,
        }
    }
}

impl HttpError for TitlesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::MissingContent => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MissingCredential | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Upstream { .. } => format!("API request failed: {self}"),
            Self::Internal(_) => format!("An unexpected error occurred: {self}"),
            _ => self.to_string(),
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::Upstream { details, .. } => Some(details.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for TitlesError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
