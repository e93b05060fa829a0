//! Configuration constants and utilities for countryline
//!
//! Defaults for the countries provider and logging, each overridable by an
//! environment variable.

/// Default base URL of the countries provider
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1/";

/// Environment variable name for overriding the provider base URL
pub const BASE_URL_ENV_VAR: &str = "COUNTRYLINE_BASE_URL";

/// Environment variable name for the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "COUNTRYLINE_LOG_LEVEL";

/// Log filter used when the environment does not set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the provider base URL, checking environment variable first, then falling back to default
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Get the log filter, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .map(|val| val.trim().to_lowercase())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
