pub(crate) mod openai_compat;

use async_trait::async_trait;
use serde_json::Value;

/// Chat completion backend
#[async_trait]
pub(crate) trait CompletionProvider: Send + Sync {
    /// Send a single user prompt, returning the provider's body untouched
    async fn complete(&self, prompt: &str) -> crate::error::Result<Value>;

    /// Get the provider name
    fn name(&self) -> &str;
}
