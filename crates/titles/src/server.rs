use crate::{
    error::TitlesError,
    prompt::title_prompt,
    provider::{CompletionProvider, openai_compat::OpenAiCompatProvider},
    types::{TitleSuggestionRequest, TitleSuggestionResult},
};

/// Title suggestion service shared by every request
pub struct Server {
    /// `None` while the provider credential is unset
    provider: Option<Box<dyn CompletionProvider>>,
}

impl Server {
    /// Ask the model for titles and relay its answer
    pub(crate) async fn suggest(&self, request: TitleSuggestionRequest) -> crate::error::Result<TitleSuggestionResult> {
        let Some(provider) = self.provider.as_deref() else {
            tracing::warn!("title suggestions requested but no API key is configured");
            return Err(TitlesError::MissingCredential);
        };

        let prompt = title_prompt(&request.content);

        tracing::debug!(
            provider = provider.name(),
            content_len = request.content.len(),
            "requesting title suggestions"
        );

        let raw = provider.complete(&prompt).await?;

        Ok(TitleSuggestionResult::from_raw(raw))
    }
}

/// Builder for constructing the title server from configuration
pub(crate) struct TitlesServerBuilder<'a> {
    config: &'a inkwell_config::Config,
}

impl<'a> TitlesServerBuilder<'a> {
    pub fn new(config: &'a inkwell_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let config = &self.config.titles;

        let provider = config.api_key.clone().map(|api_key| {
            tracing::debug!("Initializing completion provider at {}", config.base_url);
            Box::new(OpenAiCompatProvider::new(api_key, config)) as Box<dyn CompletionProvider>
        });

        if provider.is_none() {
            tracing::debug!("No title suggestion credential configured");
        }

        Server { provider }
    }
}
