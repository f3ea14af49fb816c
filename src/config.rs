//! Configuration management for ytlinks

use std::path::PathBuf;
use std::time::Duration;

use crate::cookies::CookieBlob;
use crate::error::{ApiError, Result};
use crate::utils::UrlUtils;

/// Public deployment of the yt-dlp HTTP API
pub const DEFAULT_API_BASE_URL: &str = "https://yt-dlp-api-miaomiaocompany-3d8d2eee.koyeb.app";

/// Environment variable overriding the API origin
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Environment variable naming a Netscape cookie file
pub const COOKIES_FILE_ENV: &str = "YTLINKS_COOKIES_FILE";

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    pub verbose: bool,
    pub silent: bool,
    pub pretty: bool,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
    pub cookies: Option<CookieBlob>,
    pub output: OutputConfig,
}

impl Config {
    /// Defaults with `API_BASE_URL` applied when set
    pub fn from_env() -> Result<Self> {
        let config = Config::default();
        match std::env::var(API_BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => config.with_api_base_url(&value),
            _ => Ok(config),
        }
    }

    /// Replace the API origin after validating it
    pub fn with_api_base_url(mut self, base: &str) -> Result<Self> {
        let url = UrlUtils::validate_url(base)?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::InvalidUrl(format!(
                "API base URL '{}' must not carry a query or fragment",
                base
            )));
        }
        self.api_base_url = url.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_cookies(mut self, cookies: CookieBlob) -> Self {
        self.cookies = Some(cookies);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: Some(format!("ytlinks/{}", crate::VERSION)),
            cookies: None,
            output: OutputConfig {
                file: None,
                verbose: false,
                silent: false,
                pretty: true,
            },
        }
    }
}
