//! Netscape cookie-file blobs
//!
//! Cookies are forwarded to the API verbatim as `cookies_text`. The blob is
//! never parsed here; the server hands it straight to yt-dlp.

use crate::error::{ApiError, Result};
use crate::utils::FileUtils;
use std::fmt;
use std::path::Path;

/// Opaque Netscape cookie-file contents.
#[derive(Clone, PartialEq, Eq)]
pub struct CookieBlob(String);

impl CookieBlob {
    /// Wrap cookie-file text. Blank input is rejected since the API treats an
    /// empty `cookies_text` as "no cookies".
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ApiError::CookieFile("cookie text is empty".to_string()));
        }
        Ok(Self(text))
    }

    /// Read a cookie file from disk, expanding a leading `~`.
    pub fn from_file(path: &str) -> Result<Self> {
        let path = FileUtils::expand_path(path)?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        FileUtils::check_file_readable(path)?;
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded cookie file {:?} ({} bytes)", path, text.len());
        Self::new(text).map_err(|_| ApiError::CookieFile(format!("{:?} is empty", path)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Session cookies must not end up in logs.
impl fmt::Debug for CookieBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CookieBlob({} bytes)", self.0.len())
    }
}
