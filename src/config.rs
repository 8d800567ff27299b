//! Configuration management for the GearGuard server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Advisory gateway settings (OpenAI-compatible chat completions endpoint)
#[derive(Debug, Deserialize, Clone)]
pub struct DispatchConfig {
    pub gateway_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix GEARGUARD_)
            .add_source(
                Environment::with_prefix("GEARGUARD")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override the gateway API key from AI_GATEWAY_API_KEY if present
            .set_override_option(
                "dispatch.api_key",
                env::var("AI_GATEWAY_API_KEY").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            gateway_url: "https://ai.gateway.lovable.dev/v1".to_string(),
            api_key: String::new(),
            model: "google/gemini-2.5-flash".to_string(),
        }
    }
}
