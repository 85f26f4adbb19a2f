use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::Config;

/// Environment variable holding the Sarvam AI subscription key
pub const TRANSCRIPTION_API_KEY_ENV: &str = "SARVAM_AI_API_KEY";

/// Environment variable holding the OpenRouter API key
pub const TITLES_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes, fills unset credentials from the environment and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Load the file at `path` when it exists, otherwise build the
    /// configuration from defaults and the environment alone
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file fails to load or validation fails
    pub fn load_or_env(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::info!(
            config_path = %path.display(),
            "config file not found, using defaults and environment"
        );

        Self::from_env()
    }

    /// Build a configuration from defaults, with credentials taken from
    /// `SARVAM_AI_API_KEY` and `OPENROUTER_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().finish()
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.finish()
    }

    /// Names of the provider credentials that are still unset
    ///
    /// Requests to the matching endpoint are answered with 500 until the
    /// credential is provided.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.transcription.api_key.is_none() {
            missing.push(TRANSCRIPTION_API_KEY_ENV);
        }

        if self.titles.api_key.is_none() {
            missing.push(TITLES_API_KEY_ENV);
        }

        missing
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error on out-of-range sampling settings, zero timeouts or
    /// a malformed health path
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_titles_config()?;

        if self.transcription.timeout.is_zero() {
            anyhow::bail!("transcription.timeout must be greater than 0");
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }

    fn validate_titles_config(&self) -> anyhow::Result<()> {
        let titles = &self.titles;

        if !(0.0..=2.0).contains(&titles.temperature) {
            anyhow::bail!("titles.temperature must be between 0 and 2, got {}", titles.temperature);
        }

        if titles.max_tokens == 0 {
            anyhow::bail!("titles.max_tokens must be greater than 0");
        }

        if titles.timeout.is_zero() {
            anyhow::bail!("titles.timeout must be greater than 0");
        }

        Ok(())
    }

    fn finish(mut self) -> anyhow::Result<Self> {
        self.transcription.api_key = resolve_credential(self.transcription.api_key.take(), TRANSCRIPTION_API_KEY_ENV);
        self.titles.api_key = resolve_credential(self.titles.api_key.take(), TITLES_API_KEY_ENV);

        self.validate()?;

        Ok(self)
    }
}

/// Prefer a non-blank configured key, falling back to the environment
fn resolve_credential(configured: Option<SecretString>, var: &str) -> Option<SecretString> {
    configured
        .filter(|key| !key.expose_secret().trim().is_empty())
        .or_else(|| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(SecretString::from)
        })
}
