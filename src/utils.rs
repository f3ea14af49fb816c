//! Utility functions and helpers

use crate::error::{ApiError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// URL validation and joining utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate and normalize an API base URL
    pub fn validate_url(input: &str) -> Result<Url> {
        let trimmed = input.trim();
        // The API is served over HTTPS unless a scheme says otherwise
        let url_str = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let url = Url::parse(&url_str)
            .map_err(|e| ApiError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ApiError::InvalidUrl(format!(
                "Unsupported scheme '{}' in '{}'",
                other, input
            ))),
        }
    }

    /// Join an endpoint path onto a base URL without doubling slashes
    pub fn join_endpoint(base: &str, endpoint: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = match path.strip_prefix('~') {
            Some(rest) => rest,
            None => return Ok(PathBuf::from(path)),
        };

        let home_dir = dirs::home_dir()
            .ok_or_else(|| ApiError::Config("Cannot determine home directory".to_string()))?;

        Ok(home_dir.join(rest.trim_start_matches(['/', '\\'])))
    }

    /// Check if file exists and is readable
    pub fn check_file_readable(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ApiError::FileNotFound(format!(
                "File not found: {:?}",
                path
            )));
        }

        if !path.is_file() {
            return Err(ApiError::Config(format!("Path is not a file: {:?}", path)));
        }

        std::fs::File::open(path).map_err(|e| {
            ApiError::PermissionDenied(format!("Cannot read file {:?}: {}", path, e))
        })?;

        Ok(())
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse timeout values (supports suffixes like 's', 'm', 'h'); zero is rejected
    pub fn parse_timeout(input: &str) -> Result<Duration> {
        let seconds = match input.parse::<u64>() {
            Ok(seconds) => seconds,
            Err(_) => Self::parse_timeout_with_suffix(input)?,
        };

        if seconds == 0 {
            return Err(ApiError::Config(format!(
                "Invalid timeout '{}': must be greater than zero",
                input
            )));
        }

        Ok(Duration::from_secs(seconds))
    }

    fn parse_timeout_with_suffix(input: &str) -> Result<u64> {
        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(ApiError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part
            .parse()
            .map_err(|_| ApiError::Config(format!("Invalid timeout number: '{}'", number_part)))?;

        number
            .checked_mul(suffix)
            .ok_or_else(|| ApiError::Config(format!("Timeout '{}' is too large", input)))
    }
}
