//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use inkwell_config::{Config, HealthConfig, ServerConfig, TitlesConfig, TranscriptionConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
///
/// Starts without credentials, so nothing reaches a real provider.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                transcription: TranscriptionConfig::default(),
                titles: TitlesConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point transcription at a mock Sarvam backend with a test key
    pub fn with_sarvam(mut self, base_url: &str) -> Self {
        self.config.transcription.base_url = base_url.parse().expect("valid URL");
        self.config.transcription.api_key = Some(SecretString::from("sarvam-test-key"));
        self
    }

    /// Point title suggestions at a mock completion backend with a test key
    pub fn with_completions(mut self, base_url: &str) -> Self {
        self.config.titles.base_url = base_url.parse().expect("valid URL");
        self.config.titles.api_key = Some(SecretString::from("openrouter-test-key"));
        self
    }

    /// Point providers at URLs without configuring any credential
    pub fn with_unauthenticated(mut self, sarvam_url: &str, completions_url: &str) -> Self {
        self.config.transcription.base_url = sarvam_url.parse().expect("valid URL");
        self.config.titles.base_url = completions_url.parse().expect("valid URL");
        self
    }

    /// Write temporary audio files into `dir`
    pub fn with_temp_dir(mut self, dir: &Path) -> Self {
        self.config.transcription.temp_dir = Some(dir.to_path_buf());
        self
    }

    /// Override the transcription timeout
    pub fn with_transcription_timeout(mut self, timeout: Duration) -> Self {
        self.config.transcription.timeout = timeout;
        self
    }

    /// Override the completion timeout
    pub fn with_titles_timeout(mut self, timeout: Duration) -> Self {
        self.config.titles.timeout = timeout;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
