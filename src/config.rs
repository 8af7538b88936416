// ============================================================================
// APP CONFIG - read at compile time (see build.rs for .env support)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_LAUNCH_YEAR, FALLBACK_PATCH_URL, FETCH_TIMEOUT_MS, SPACEX_API_URL,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub launch_year: u16,
    pub request_timeout_ms: u32,
    pub fallback_patch_url: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: SPACEX_API_URL.to_string(),
            launch_year: DEFAULT_LAUNCH_YEAR,
            request_timeout_ms: FETCH_TIMEOUT_MS,
            fallback_patch_url: FALLBACK_PATCH_URL.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "SPACEX_API_URL" => option_env!("SPACEX_API_URL"),
            "LAUNCH_YEAR" => option_env!("LAUNCH_YEAR"),
            "REQUEST_TIMEOUT_MS" => option_env!("REQUEST_TIMEOUT_MS"),
            "FALLBACK_PATCH_URL" => option_env!("FALLBACK_PATCH_URL"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            _ => None,
        })
    }

    /// Unset or unparseable keys keep their default value.
    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("SPACEX_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            launch_year: lookup("LAUNCH_YEAR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.launch_year),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            fallback_patch_url: lookup("FALLBACK_PATCH_URL")
                .map(str::to_string)
                .unwrap_or(defaults.fallback_patch_url),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Launch-listing endpoint for the configured year
    pub fn launches_url(&self) -> String {
        format!("{}/launches?launch_year={}", self.api_url, self.launch_year)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Level for wasm-logger; falls back to Info on garbage input
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
