//! JSON format, minify and validate.

use crate::error::ToolError;

/// Pretty-print JSON with 2-space indentation.
///
/// Any parse failure maps to the fixed "Invalid JSON format" message;
/// the caller shows it inline and keeps the input unchanged.
pub fn format(input: &str) -> Result<String, ToolError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|_| ToolError::InvalidJson)?;
    serde_json::to_string_pretty(&value).map_err(|_| ToolError::InvalidJson)
}

/// Re-serialize JSON with no insignificant whitespace.
pub fn minify(input: &str) -> Result<String, ToolError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|_| ToolError::InvalidJson)?;
    serde_json::to_string(&value).map_err(|_| ToolError::InvalidJson)
}

/// Parse-only check.
pub fn validate(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok()
}
