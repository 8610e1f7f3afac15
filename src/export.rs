//! File output helpers.
//!
//! The browser version of each tool offers a "download" that builds a
//! blob with a MIME type and a canonical file name. On the CLI the same
//! contract becomes: write the bytes to the path the user gave, or fall
//! back to the tool's canonical name in the current directory.

use std::path::{Path, PathBuf};

/// Canonical download names, mirroring the original tools.
pub mod names {
    /// `json format` output (`application/json`)
    pub const FORMATTED_JSON: &str = "formatted.json";
    /// `gradient` stylesheet (`text/css`)
    pub const GRADIENT_CSS: &str = "gradient.css";
    /// `qr` image (`image/png`)
    pub const QR_PNG: &str = "qrcode.png";
    /// `base64 encode` output (`text/plain`)
    pub const ENCODED_TEXT: &str = "encoded-text.txt";
    /// `base64 decode` output (`text/plain`)
    pub const DECODED_TEXT: &str = "decoded-text.txt";

    /// Per-rule palette stylesheet (`text/css`)
    pub fn palette_css(rule: color_harmony::HarmonyRule) -> String {
        format!("{rule}-palette.css")
    }

    /// Formatted code with the language's extension (`text/plain`)
    pub fn formatted_code(language: crate::tools::code::Language) -> String {
        format!("formatted-code.{}", language.extension())
    }
}

/// Write `bytes` to `path` if given, else to `default_name` in the
/// current directory. A directory path gets the canonical name joined
/// onto it. Returns the path actually written.
pub fn save(path: Option<PathBuf>, default_name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    let target = match path {
        Some(p) if p.is_dir() => p.join(default_name),
        Some(p) => p,
        None => PathBuf::from(default_name),
    };
    write_all(&target, bytes)?;
    Ok(target)
}

fn write_all(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, bytes)
}
