//! Client for the remote QR image service.
//!
//! QR encoding is deliberately not done locally: the tool delegates to an
//! external image-rendering endpoint (qrserver.com by default) that takes
//! `size`, `data`, `color` and `bgcolor` query parameters and returns a
//! PNG. This is a hard external collaborator boundary; swapping it out
//! would mean adopting a real QR encoding library.

use color_harmony::Rgb;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::QrConfig;
use crate::error::QrError;

/// Size limits of the original tool's slider, enforced before any request.
const MIN_SIZE: u32 = 100;
const MAX_SIZE: u32 = 500;

/// One QR image request.
#[derive(Debug, Clone)]
pub struct QrRequest {
    /// Text, URL or other payload to encode
    pub data: String,
    /// Square image edge in pixels (100..=500)
    pub size: u32,
    /// Foreground color
    pub color: Rgb,
    /// Background color
    pub bgcolor: Rgb,
}

/// HTTP client for the QR image service.
pub struct QrClient {
    endpoint: String,
    client: reqwest::Client,
}

impl QrClient {
    /// Build a client from configuration (endpoint and timeout).
    pub fn new(config: &QrConfig) -> Result<Self, QrError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// The full image URL for a request.
    ///
    /// The payload is percent-encoded; colors are sent as bare hex digits
    /// (the service rejects a leading `#`).
    pub fn image_url(&self, request: &QrRequest) -> Result<String, QrError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&request.size) {
            return Err(QrError::SizeOutOfRange(request.size));
        }

        let data = utf8_percent_encode(&request.data, NON_ALPHANUMERIC);
        Ok(format!(
            "{}?size={size}x{size}&data={data}&color={color}&bgcolor={bgcolor}",
            self.endpoint,
            size = request.size,
            color = hex_digits(request.color),
            bgcolor = hex_digits(request.bgcolor),
        ))
    }

    /// Fetch the rendered PNG.
    ///
    /// Network and HTTP failures come back as [`QrError`] values; the
    /// caller logs them and carries on, it never crashes.
    pub async fn fetch_png(&self, request: &QrRequest) -> Result<Vec<u8>, QrError> {
        let url = self.image_url(request)?;
        tracing::debug!(%url, "Requesting QR image");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "QR service error response");
            return Err(QrError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Hex channels without the leading `#`, as the service expects.
fn hex_digits(color: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
