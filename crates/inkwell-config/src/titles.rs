use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// OpenAI-compatible chat completion provider used for title suggestions
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitlesConfig {
    /// Bearer credential; requests fail with 500 while unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL, `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Completion token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on a single provider call
    #[serde(default = "default_timeout", deserialize_with = "crate::duration::deserialize")]
    pub timeout: Duration,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://openrouter.ai/api/v1").expect("valid default URL")
}

fn default_model() -> String {
    "mistralai/mistral-7b-instruct:free".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    200
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let config: TitlesConfig = toml::from_str("").unwrap();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url.as_str(), "https://openrouter.ai/api/v1");
        assert_eq!(config.model, "mistralai/mistral-7b-instruct:free");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_applied() {
        let toml = r#"
            base_url = "https://api.openai.com/v1"
            model = "gpt-4o-mini"
            temperature = 0.2
            max_tokens = 64
            timeout = "5s"
        "#;

        let config: TitlesConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.base_url.host_str(), Some("api.openai.com"));
        assert_eq!(config.model, "gpt-4o-mini");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 64);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
