//! Runtime configuration for the invoice manager.

use std::path::PathBuf;

const DATA_PATH_VAR: &str = "INVOICE_DATA_PATH";
const LOG_FILTER_VAR: &str = "RUST_LOG";
const CURRENCY_SYMBOL_VAR: &str = "INVOICE_CURRENCY_SYMBOL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Location of the JSON payload read once at startup
    pub data_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Prefix used when formatting money in views
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("json/invoices.json"),
            log_filter: "info".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_path: non_empty(DATA_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            log_filter: non_empty(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
            currency_symbol: non_empty(CURRENCY_SYMBOL_VAR).unwrap_or(defaults.currency_symbol),
        }
    }
}
