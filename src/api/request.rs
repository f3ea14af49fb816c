//! Request payloads sent to the API

use crate::cookies::CookieBlob;
use serde::Serialize;

/// Body of `POST /api/stream-links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamLinksRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies_text: Option<String>,
}

impl StreamLinksRequest {
    pub fn new(video_url: &str) -> Self {
        Self {
            url: video_url.to_string(),
            cookies_text: None,
        }
    }

    /// Attach the cookie file contents verbatim
    pub fn with_cookies(mut self, cookies: &CookieBlob) -> Self {
        self.cookies_text = Some(cookies.as_str().to_string());
        self
    }
}
