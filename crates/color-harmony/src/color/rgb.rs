//! 24-bit RGB color type
//!
//! `Rgb` is the canonical representation for all input and output. It is
//! immutable once constructed; edits produce a new value.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::hsl::Hsl;

/// A 24-bit RGB color.
///
/// The canonical text form is a 7-character lowercase hex string
/// (`#rrggbb`). Each channel covers the full 0..=255 range.
///
/// Use this type at the boundaries (parsing user input, emitting CSS)
/// and convert to [`Hsl`] for palette math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_string(), "#ff0000");
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from the low 24 bits of an integer.
    ///
    /// Bits above the 24th are discarded. This matches the uniform-random
    /// generation scheme of drawing an integer in `0..0x1000000`.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Rgb;
    /// let color = Rgb::from_u24(0x3b82f6);
    /// assert_eq!(color, Rgb::new(0x3b, 0x82, 0xf6));
    /// ```
    #[inline]
    pub fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    /// Format as the canonical lowercase `#rrggbb` string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Hsl> for Rgb {
    /// Convert from HSL using the standard formula.
    ///
    /// Uses the chroma shortcut `a = s * min(l, 1-l)` and the per-channel
    /// function `f(n)` with `k = (n + h/30) mod 12`, evaluated at n = 0, 8
    /// and 4 for red, green and blue. Each channel is rounded to the
    /// nearest integer in 0..=255.
    fn from(hsl: Hsl) -> Self {
        let h = hsl.h;
        let l = hsl.l / 100.0;
        let a = hsl.s * l.min(1.0 - l) / 100.0;

        let f = |n: f64| -> u8 {
            let k = (n + h / 30.0).rem_euclid(12.0);
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: f(0.0),
            g: f(8.0),
            b: f(4.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an Rgb color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`. Parsing is case-insensitive and
    /// leading/trailing whitespace is trimmed. Shorter or longer strings
    /// are rejected; the canonical form is always 6 hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_harmony::Rgb;
    ///
    /// let blue: Rgb = "#3B82F6".parse().unwrap();
    /// assert_eq!(blue.to_string(), "#3b82f6");
    ///
    /// let no_hash: Rgb = "3b82f6".parse().unwrap();
    /// assert_eq!(blue, no_hash);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
