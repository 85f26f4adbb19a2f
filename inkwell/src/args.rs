use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, ValueEnum};
use inkwell_telemetry::LogFormat;

/// Inkwell writing assistant
#[derive(Debug, Parser)]
#[command(name = "inkwell", about = "Audio transcription and blog title suggestions over HTTP")]
pub struct Args {
    /// Path to configuration file; defaults and environment are used when it does not exist
    #[arg(short, long, default_value = "inkwell.toml", env = "INKWELL_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "INKWELL_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter, e.g. `info` or `inkwell=debug,tower_http=debug`; falls back to `RUST_LOG`
    #[arg(long, env = "INKWELL_LOG")]
    pub log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogStyle::Text, env = "INKWELL_LOG_FORMAT")]
    pub log_format: LogStyle,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogStyle {
    Text,
    Json,
}

impl Args {
    /// Filter directive for the subscriber
    pub fn log_filter(&self) -> String {
        self.log_level
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| "info".to_owned())
    }
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Text => Self::Text,
            LogStyle::Json => Self::Json,
        }
    }
}
