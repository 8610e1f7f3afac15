use thiserror::Error;

/// Errors from the pure text/codec utilities.
///
/// Every variant is a recoverable, user-facing condition: the tools never
/// panic on bad input, they hand back a descriptive message and leave the
/// caller's input untouched.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    // Fixed message, matched by callers that show it inline
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Unknown gradient direction '{0}' (expected 0deg to 315deg in 45 degree steps)")]
    UnknownDirection(String),

    #[error("Unknown gradient kind '{0}' (expected 'linear' or 'radial')")]
    UnknownGradientKind(String),

    #[error("Unknown gradient preset '{0}'")]
    UnknownPreset(String),

    #[error("Unknown language '{0}' (expected javascript, typescript, html, css, json or python)")]
    UnknownLanguage(String),
}

/// Errors from the remote QR image service client.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR size {0}px out of range (100-500)")]
    SizeOutOfRange(u32),

    #[error("QR service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("QR service returned HTTP {0}")]
    Status(u16),
}
