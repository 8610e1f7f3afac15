//! Base64 encode/decode with UTF-8 safe round trips.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ToolError;

/// Encode a UTF-8 string as standard base64 (with padding).
///
/// Multi-byte characters are encoded through their UTF-8 bytes, so
/// `decode(encode(s)) == s` holds for any string.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard base64 back into a UTF-8 string.
///
/// Malformed base64 (bad alphabet or padding) and payloads that are not
/// valid UTF-8 both surface as a [`ToolError`] message, never a panic.
pub fn decode(input: &str) -> Result<String, ToolError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_value() {
        assert_eq!(encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
    }

    #[test]
    fn test_round_trip_ascii() {
        let input = "The quick brown fox";
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_round_trip_multibyte() {
        // Accented characters and an emoji exercise 2- and 4-byte UTF-8
        let input = "héllo 🎉";
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode("  SGVsbG8=  ").unwrap(), "Hello");
    }

    #[test]
    fn test_decode_bad_alphabet() {
        let err = decode("not@base64!").unwrap_err();
        assert!(err.to_string().starts_with("Invalid base64 input"));
    }

    #[test]
    fn test_decode_bad_padding() {
        let err = decode("SGVsbG8").unwrap_err();
        assert!(err.to_string().starts_with("Invalid base64 input"));
    }

    #[test]
    fn test_decode_non_utf8_payload() {
        // 0xFF 0xFE is valid base64 content but not valid UTF-8
        let encoded = STANDARD.encode([0xffu8, 0xfe]);
        let err = decode(&encoded).unwrap_err();
        assert_eq!(err.to_string(), "Decoded data is not valid UTF-8");
    }
}
