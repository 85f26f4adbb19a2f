#![allow(clippy::must_use_candidate)]

mod duration;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;
pub mod titles;
pub mod transcription;

use serde::Deserialize;

pub use health::*;
pub use loader::{TITLES_API_KEY_ENV, TRANSCRIPTION_API_KEY_ENV};
pub use server::*;
pub use telemetry::TelemetryConfig;
pub use titles::*;
pub use transcription::*;

/// Top-level Inkwell configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    /// Title suggestion (completion) provider configuration
    #[serde(default)]
    pub titles: TitlesConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
