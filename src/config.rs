use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from an optional YAML file.
///
/// Every field has a default, so the tools work with no config at all.
/// The file location comes from the `CONFIG_FILE` environment variable;
/// a missing or unreadable file falls back to defaults with a warning
/// rather than failing the command.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// QR image service settings
    #[serde(default)]
    pub qr: QrConfig,

    /// Palette tool settings
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Settings for the remote QR image service.
#[derive(Debug, Deserialize, Clone)]
pub struct QrConfig {
    /// Image service endpoint (query parameters are appended)
    #[serde(default = "default_qr_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_qr_timeout")]
    pub timeout_secs: u64,

    /// Default image size in pixels (valid range 100-500)
    #[serde(default = "default_qr_size")]
    pub size: u32,

    /// Default foreground color (hex)
    #[serde(default = "default_qr_color")]
    pub color: String,

    /// Default background color (hex)
    #[serde(default = "default_qr_bgcolor")]
    pub bgcolor: String,
}

fn default_qr_endpoint() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".to_string()
}

fn default_qr_timeout() -> u64 {
    10
}

fn default_qr_size() -> u32 {
    200
}

fn default_qr_color() -> String {
    "#000000".to_string()
}

fn default_qr_bgcolor() -> String {
    "#ffffff".to_string()
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_qr_endpoint(),
            timeout_secs: default_qr_timeout(),
            size: default_qr_size(),
            color: default_qr_color(),
            bgcolor: default_qr_bgcolor(),
        }
    }
}

/// Settings for the palette tool.
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    /// Base color used when none is given on the command line
    #[serde(default = "default_base_color")]
    pub base_color: String,
}

fn default_base_color() -> String {
    "#3B82F6".to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the `CONFIG_FILE` environment variable.
    ///
    /// Returns defaults when the variable is unset, the file is missing,
    /// or the YAML does not parse; the last two log a warning.
    pub fn load() -> Self {
        let Some(path) = std::env::var("CONFIG_FILE").ok().map(PathBuf::from) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read config file, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
