//! Connection settings for the MealDB API.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_ENV: &str = "MEALDB_BASE_URL";
pub const TIMEOUT_ENV: &str = "MEALDB_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// API root without trailing slash, e.g. `https://www.themealdb.com/api/json/v1/1`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `MEALDB_BASE_URL` / `MEALDB_TIMEOUT_SECS` if set.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(BASE_URL_ENV).ok().as_deref(),
            std::env::var(TIMEOUT_ENV).ok().as_deref(),
        )
    }

    fn from_vars(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(raw) = timeout_secs {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    TIMEOUT_ENV,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }
        config
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_vars(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::from_vars(Some("http://localhost:8080/api/"), Some("5"));
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = ApiConfig::from_vars(Some("   "), Some("soon"));
        assert_eq!(config, ApiConfig::default());
        let config = ApiConfig::from_vars(None, Some("0"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
