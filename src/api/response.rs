//! API response models and formatting

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Best audio-only stream chosen by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    pub url: Option<String>,
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub abr: Option<f64>,
    pub acodec: Option<String>,
    pub filesize: Option<u64>,
}

/// Best video stream, preferring formats that also carry audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    pub url: Option<String>,
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub resolution: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub fps: Option<f64>,
    pub filesize: Option<u64>,
}

/// Response of `POST /api/stream-links`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamLinks {
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub thumbnail: Option<String>,
    pub audio_stream: Option<AudioStream>,
    pub video_stream: Option<VideoStream>,
}

impl StreamLinks {
    /// Direct URL of the audio stream, if one was resolved
    pub fn audio_url(&self) -> Option<&str> {
        self.audio_stream.as_ref()?.url.as_deref()
    }

    /// Direct URL of the video stream, if one was resolved
    pub fn video_url(&self) -> Option<&str> {
        self.video_stream.as_ref()?.url.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSummary {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub quality: Option<f64>,
    pub filesize: Option<u64>,
    pub url: Option<String>,
}

/// Response of `GET /api/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    pub description: Option<String>,
    #[serde(default)]
    pub formats: Vec<FormatSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDetail {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub resolution: Option<String>,
    pub fps: Option<f64>,
    pub filesize: Option<u64>,
    /// Total bitrate in kbit/s
    pub tbr: Option<f64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub format_note: Option<String>,
}

/// Response of `GET /api/formats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatList {
    pub title: Option<String>,
    #[serde(default)]
    pub formats: Vec<FormatDetail>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<String>,
    pub service: Option<String>,
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body the server sends alongside 4xx/5xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Renders decoded responses for display
pub struct ResponseFormatter {
    pretty: bool,
}

impl ResponseFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}
