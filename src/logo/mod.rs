//! Best-effort logo fetching
//!
//! Logos are decorative. Every failure (network, HTTP status, timeout,
//! non-image body) is reported as a [`FetchError`] and then mapped to
//! [`LogoStatus::Placeholder`] by [`fetch_all`]; nothing here ever aborts the
//! rest of the dashboard.

mod http;

pub use http::{DEFAULT_TIMEOUT, HttpImageFetcher};

use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;

use crate::catalog::Tool;

/// Glyph shown when a logo is unavailable
pub const LOGO_PLACEHOLDER: &str = "🔧";

/// Image container formats recognized by content sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Ico,
    Webp,
    Svg,
}

impl ImageFormat {
    /// Detect the format from the first bytes of a body
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
            Some(Self::Ico)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else if looks_like_svg(bytes) {
            Some(Self::Svg)
        } else {
            None
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Ico => "ico",
            Self::Webp => "webp",
            Self::Svg => "svg",
        }
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// A fetched image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Why a logo could not be fetched
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request did not finish in time
    #[error("Timed out fetching {0}")]
    Timeout(String),

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Body was not a recognizable image
    #[error("Not an image: {0}")]
    NotAnImage(String),

    /// HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),
}

/// Capability to fetch an image by URL
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Image, FetchError>;
}

/// Outcome of a logo fetch as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoStatus {
    /// Fetch still in flight (or fetching disabled)
    Pending,
    /// Image fetched
    Loaded(ImageFormat),
    /// Fetch failed; show the placeholder
    Placeholder,
}

impl LogoStatus {
    /// Map a fetch result, swallowing the error
    pub fn from_result(result: &Result<Image, FetchError>) -> Self {
        match result {
            Ok(image) => Self::Loaded(image.format),
            Err(_) => Self::Placeholder,
        }
    }

    /// Short glyph for terminal display
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "▣",
            Self::Pending | Self::Placeholder => LOGO_PLACEHOLDER,
        }
    }
}

/// Fetch every tool's logo concurrently.
///
/// Returns one `(tool name, status)` pair per tool, in catalog order. A
/// failing fetch only affects its own entry.
pub async fn fetch_all(fetcher: &dyn ImageFetcher, tools: &[Tool]) -> Vec<(String, LogoStatus)> {
    let fetches = tools.iter().map(|tool| async move {
        if tool.logo_url.is_empty() {
            return (tool.name.clone(), LogoStatus::Placeholder);
        }
        let result = fetcher.fetch(&tool.logo_url).await;
        match &result {
            Ok(image) => log::debug!("Fetched {} logo for {}", image.format.name(), tool.name),
            Err(e) => log::warn!("Logo for {} unavailable: {}", tool.name, e),
        }
        (tool.name.clone(), LogoStatus::from_result(&result))
    });
    join_all(fetches).await
}
