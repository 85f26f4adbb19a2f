use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Sarvam AI speech-to-text configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// API subscription key; requests fail with 500 while unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Language hint; `unknown` lets the provider auto-detect
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Upper bound on a single provider call
    #[serde(default = "default_timeout", deserialize_with = "crate::duration::deserialize")]
    pub timeout: Duration,
    /// Directory for uploaded audio while it is in flight (system temp dir when unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            language_code: default_language_code(),
            timeout: default_timeout(),
            temp_dir: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.sarvam.ai").expect("valid default URL")
}

fn default_model() -> String {
    "saarika:v2.5".to_string()
}

fn default_language_code() -> String {
    "unknown".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout() -> Duration {
    Duration::from_secs(120)
}
