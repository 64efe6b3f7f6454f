//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CAP feed layout settings
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        if self.feed.base_url.trim().is_empty() {
            return Err(AppError::validation("feed.base_url is empty"));
        }
        if self.feed.hour_window == 0 {
            return Err(AppError::validation("feed.hour_window must be > 0"));
        }
        if self.feed.language.trim().is_empty() {
            return Err(AppError::validation("feed.language is empty"));
        }
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between requests in milliseconds, a courtesy to the upstream server
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Maximum concurrent bulletin fetches
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Retry attempts for a failed bulletin fetch
    #[serde(default = "defaults::max_retries")]
    pub max_retries: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            max_concurrent: defaults::max_concurrent(),
            max_retries: defaults::max_retries(),
        }
    }
}

/// CAP feed layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Root of the `{date}/{office}/{hour}/` directory hierarchy
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// CAP info-block language to keep
    #[serde(default = "defaults::language")]
    pub language: String,

    /// Number of most-recent hour directories scanned per crawl
    #[serde(default = "defaults::hour_window")]
    pub hour_window: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            language: defaults::language(),
            hour_window: defaults::hour_window(),
        }
    }
}

/// Default configuration values.
mod defaults {
    pub fn user_agent() -> String {
        format!("capwatch/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        10
    }

    pub fn request_delay() -> u64 {
        250
    }

    pub fn max_concurrent() -> usize {
        4
    }

    pub fn max_retries() -> usize {
        2
    }

    pub fn base_url() -> String {
        "https://dd.weather.gc.ca/alerts/cap".to_string()
    }

    pub fn language() -> String {
        "en-CA".to_string()
    }

    pub fn hour_window() -> usize {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_hour_window() {
        let mut config = Config::default();
        config.feed.hour_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.feed.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [crawler]
            timeout_secs = 8

            [feed]
            hour_window = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.crawler.timeout_secs, 8);
        assert_eq!(config.feed.hour_window, 3);
        assert_eq!(config.feed.language, "en-CA");
        assert_eq!(config.crawler.request_delay_ms, 250);
    }
}
