//! Configuration module for settlement-service.

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct SettlementConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Largest number of line items accepted in one computation request.
    pub max_line_items: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_items: 500,
        }
    }
}

impl SettlementConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let max_line_items = match env::var("MAX_LINE_ITEMS") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("MAX_LINE_ITEMS is invalid: {}", e))
            })?,
            Err(_) => LimitsConfig::default().max_line_items,
        };

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "settlement-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            limits: LimitsConfig { max_line_items },
        })
    }

    /// Configuration for in-process tests: random port, defaults everywhere else.
    pub fn for_tests() -> Self {
        Self {
            common: core_config::Config { port: 0 },
            service_name: "settlement-service-test".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
            limits: LimitsConfig::default(),
        }
    }
}
