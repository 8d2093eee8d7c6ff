//! Configuration management for the body metrics CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`--config` path, else config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: BM__)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// How the results panel is printed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub show_bmi_category: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// JSON log lines instead of pretty output
    pub json: bool,
    /// Default filter when RUST_LOG is unset
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Text,
                pretty_json: true,
                show_bmi_category: true,
            },
            logging: LoggingConfig {
                json: false,
                filter: "body_metrics=info,body_metrics_cli=info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// An explicit path must exist; the environment-specific file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?);

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(
                config::File::with_name(&format!("config/{}.toml", env)).required(false),
            ),
        };

        let config = builder
            // Override with environment variables (BM__ prefix)
            // e.g., BM__OUTPUT__FORMAT=json sets output.format
            .add_source(config::Environment::with_prefix("BM").separator("__"))
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// JSON logs in production or when asked for
    pub fn json_logs(&self) -> bool {
        self.logging.json || Self::is_production()
    }
}
