//! yt-dlp HTTP API client
//!
//! [`StreamLinksClient`] wraps a pooled `reqwest` client together with an
//! immutable [`Config`]. Every call is independent, so a single client can be
//! cloned freely and used from many tasks at once.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::utils::UrlUtils;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Request, Response, StatusCode};
use serde::de::DeserializeOwned;

pub mod request;
pub mod response;

pub use request::StreamLinksRequest;
pub use response::{
    ApiErrorBody, AudioStream, FormatDetail, FormatList, FormatSummary, HealthStatus,
    ResponseFormatter, StreamLinks, VideoInfo, VideoStream,
};

pub const STREAM_LINKS_PATH: &str = "/api/stream-links";
pub const INFO_PATH: &str = "/api/info";
pub const FORMATS_PATH: &str = "/api/formats";
pub const HEALTH_PATH: &str = "/health";

const JSON_MIME: &str = "application/json";

/// Client for the yt-dlp HTTP API
#[derive(Clone)]
pub struct StreamLinksClient {
    client: Client,
    config: Arc<Config>,
}

impl StreamLinksClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build().map_err(ApiError::Http)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of an API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        UrlUtils::join_endpoint(&self.config.api_base_url, path)
    }

    /// Build the `/api/stream-links` payload for a video page
    pub fn stream_links_payload(
        &self,
        video_url: &str,
        use_cookies: bool,
    ) -> Result<StreamLinksRequest> {
        let payload = StreamLinksRequest::new(video_url);
        if !use_cookies {
            return Ok(payload);
        }

        let cookies = self.config.cookies.as_ref().ok_or_else(|| {
            ApiError::Config("cookies requested but no cookie blob configured".to_string())
        })?;
        log::debug!("Attaching cookies ({} bytes)", cookies.len());
        Ok(payload.with_cookies(cookies))
    }

    /// Prepare the stream-links POST without sending it
    pub fn build_stream_links_request(&self, video_url: &str, use_cookies: bool) -> Result<Request> {
        let payload = self.stream_links_payload(video_url, use_cookies)?;
        let body = serde_json::to_vec(&payload)?;

        self.client
            .post(self.endpoint(STREAM_LINKS_PATH))
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .body(body)
            .build()
            .map_err(ApiError::Http)
    }

    /// Resolve direct stream links for a video page
    pub async fn get_stream_links(&self, video_url: &str, use_cookies: bool) -> Result<StreamLinks> {
        let request = self.build_stream_links_request(video_url, use_cookies)?;
        self.send_json(request).await
    }

    /// [`Self::get_stream_links`] with cookies enabled
    pub async fn get_stream_links_default(&self, video_url: &str) -> Result<StreamLinks> {
        self.get_stream_links(video_url, true).await
    }

    /// Fetch video metadata without resolving streams
    pub async fn video_info(&self, video_url: &str) -> Result<VideoInfo> {
        let request = self.build_query_request(INFO_PATH, video_url)?;
        self.send_json(request).await
    }

    /// List every format the extractor found
    pub async fn formats(&self, video_url: &str) -> Result<FormatList> {
        let request = self.build_query_request(FORMATS_PATH, video_url)?;
        self.send_json(request).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let request = self
            .client
            .get(self.endpoint(HEALTH_PATH))
            .header(ACCEPT, JSON_MIME)
            .build()
            .map_err(ApiError::Http)?;
        self.send_json(request).await
    }

    fn build_query_request(&self, path: &str, video_url: &str) -> Result<Request> {
        self.client
            .get(self.endpoint(path))
            .query(&[("url", video_url)])
            .header(ACCEPT, JSON_MIME)
            .build()
            .map_err(ApiError::Http)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let method = request.method().clone();
        let target = request.url().clone();
        log::debug!("> {} {}", method, target);

        let response = self.client.execute(request).await.map_err(|err| {
            log::debug!("{} {} failed: {}", method, target, err);
            ApiError::from_transport(err)
        })?;

        log::debug!("< {} from {} {}", response.status(), method, target);
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let message = match response.text().await {
            Ok(body) => error_message(status, &body),
            Err(err) => {
                log::debug!("Failed to read {} error body: {}", status, err);
                error_message(status, "")
            }
        };
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await.map_err(ApiError::from_transport)?;
    Ok(serde_json::from_str(&body)?)
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error;
    }
    match body.trim() {
        "" => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        text => text.to_string(),
    }
}
