use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated title suggestion request
#[derive(Debug)]
pub struct TitleSuggestionRequest {
    /// Blog content, never empty
    pub content: String,
}

/// Request body as sent by the client
#[derive(Debug, Deserialize)]
pub(crate) struct TitleSuggestionPayload {
    #[serde(default)]
    pub content: Option<String>,
}

/// Provider response plus the fields most callers want
#[derive(Debug, PartialEq, Serialize)]
pub struct TitleSuggestionResult {
    /// Full provider body, unmodified
    pub raw_response: Value,
    /// Text of the first completion choice, empty when there is none
    ///
    /// The prompt asks for `{"titles": [...]}` but the text is not parsed;
    /// callers decode it themselves.
    pub content: String,
    /// Model reported by the provider
    pub model: Value,
    /// Token accounting reported by the provider
    pub usage: Value,
}

impl TitleSuggestionResult {
    pub fn from_raw(raw_response: Value) -> Self {
        let content = raw_response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let model = raw_response.get("model").cloned().unwrap_or(Value::Null);
        let usage = raw_response.get("usage").cloned().unwrap_or(Value::Null);

        Self {
            raw_response,
            content,
            model,
            usage,
        }
    }
}

/// Chat completion request in the OpenAI wire format
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}
