use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each handler crate's error type. The crate converts it
/// into an axum response, keeping the error taxonomy itself free of axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Upstream error payload to relay alongside the message, if any
    fn details(&self) -> Option<Value> {
        None
    }

    /// JSON body describing this error
    fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.client_message(),
            details: self.details(),
        }
    }
}

/// Error payload: `{"error": "...", "details": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// Human-readable description
    pub error: String,
    /// Upstream error detail, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
