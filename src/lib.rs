//! ytlinks - a client for the yt-dlp HTTP API
//!
//! Sends a video page URL (and, optionally, a Netscape cookie file) to the
//! API's `/api/stream-links` endpoint and returns the direct media URLs it
//! resolves.

pub mod api;
pub mod cli;
pub mod config;
pub mod cookies;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod output;
pub mod utils;

pub use api::StreamLinksClient;
pub use error::{ApiError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
