//! HTTP logo fetcher backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{FetchError, Image, ImageFetcher, ImageFormat};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest body accepted as a logo
const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Fetches logos over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Image, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| transport_error(url, e))?;
        if bytes.len() > MAX_LOGO_BYTES {
            return Err(FetchError::NotAnImage(format!("{} ({} bytes)", url, bytes.len())));
        }

        let format = ImageFormat::sniff(&bytes).ok_or_else(|| FetchError::NotAnImage(url.to_string()))?;
        Ok(Image {
            format,
            bytes: bytes.to_vec(),
        })
    }
}
