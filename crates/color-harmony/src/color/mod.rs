//! Color types and conversion utilities
//!
//! This module provides the two color representations used by the harmony
//! engine and the conversions between them.
//!
//! # Representations
//!
//! - **Rgb**: 24-bit color in canonical `#rrggbb` hex form. Use for I/O.
//! - **Hsl**: hue/saturation/lightness. Use for palette math.
//!
//! # Example
//!
//! ```
//! use color_harmony::{Hsl, Rgb};
//!
//! // Parse a hex color from user input
//! let rgb: Rgb = "#ff8000".parse().unwrap();
//!
//! // Convert to HSL to manipulate hue or lightness
//! let hsl = Hsl::from(rgb);
//!
//! // After adjusting, convert back to hex for output
//! let output = Rgb::from(hsl);
//! ```

mod error;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hsl::Hsl;
pub use rgb::Rgb;
