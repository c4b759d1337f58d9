use crate::core::timezone::dashboard_offset;
use crate::core::{AppError, Currency, Result};
use chrono::FixedOffset;
use std::env;

pub mod backend;
pub mod server;

pub use backend::BackendConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub currency: Currency,
    /// Offset the weekly order chart is bucketed in
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

impl AppConfig {
    pub fn chart_offset(&self) -> Result<FixedOffset> {
        dashboard_offset(self.utc_offset_minutes).map_err(AppError::Configuration)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            currency: Currency::NGN,
            utc_offset_minutes: 60,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
                currency: env::var("DASHBOARD_CURRENCY")
                    .unwrap_or_else(|_| "NGN".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
                utc_offset_minutes: env::var("DASHBOARD_UTC_OFFSET_MINUTES")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid DASHBOARD_UTC_OFFSET_MINUTES".to_string())
                    })?,
            },
            server: ServerConfig::from_env()?,
            backend: BackendConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.app.chart_offset()?;
        self.backend.validate()?;

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
