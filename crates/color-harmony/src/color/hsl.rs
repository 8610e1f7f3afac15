//! HSL color representation
//!
//! HSL (hue/saturation/lightness) is the working space for palette math:
//! every harmony rule is defined as hue or lightness offsets from a base
//! color. Values are derived from an [`Rgb`] on demand and never persisted.

use super::rgb::Rgb;

/// A color in HSL space.
///
/// # Components
///
/// - `h`: Hue in degrees, 0.0..360.0
/// - `s`: Saturation in percent, 0.0..=100.0
/// - `l`: Lightness in percent, 0.0..=100.0
///
/// # Achromatic Colors
///
/// Greys (all RGB channels equal) have no defined hue or saturation; the
/// conversion from [`Rgb`] yields `h = 0, s = 0` for them. This is a
/// property of the HSL model, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0)
    pub h: f64,
    /// Saturation in percent (0.0..=100.0)
    pub s: f64,
    /// Lightness in percent (0.0..=100.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new Hsl color.
    ///
    /// Values are stored as given; hue wrapping happens in the conversion
    /// back to [`Rgb`], so callers may pass offsets outside 0..360.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Return a copy with the hue shifted by `degrees`, wrapped into
    /// 0.0..360.0 with a positive-result modulo.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Hsl;
    /// let base = Hsl::new(10.0, 50.0, 50.0);
    /// assert_eq!(base.with_hue_offset(-30.0).h, 340.0);
    /// assert_eq!(base.with_hue_offset(360.0).h, 10.0);
    /// ```
    #[inline]
    pub fn with_hue_offset(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Return a copy with the given saturation.
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Return a copy with the given lightness.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

impl From<Rgb> for Hsl {
    /// Convert from RGB using the standard piecewise formula.
    ///
    /// Lightness is the mid-point of the extreme channels. Saturation is
    /// `d / (2 - max - min)` above 50% lightness and `d / (max + min)`
    /// below. Hue picks a branch based on which channel is largest, with
    /// the red branch wrapped to a positive result.
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation are undefined, collapse to 0
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < 0.5,
            "{what}: expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn test_primary_colors() {
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert_close(red.h, 0.0, "red hue");
        assert_close(red.s, 100.0, "red saturation");
        assert_close(red.l, 50.0, "red lightness");

        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert_close(green.h, 120.0, "green hue");

        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert_close(blue.h, 240.0, "blue hue");
    }

    #[test]
    fn test_achromatic_collapses_to_zero() {
        for value in [0u8, 64, 128, 200, 255] {
            let grey = Hsl::from(Rgb::new(value, value, value));
            assert_eq!(grey.h, 0.0);
            assert_eq!(grey.s, 0.0);
            assert_close(grey.l, f64::from(value) / 255.0 * 100.0, "grey lightness");
        }
    }

    #[test]
    fn test_red_branch_wraps_positive() {
        // Magenta-ish: red is max, blue > green, so (g-b)/d is negative
        // and must wrap into 0..360 rather than go negative.
        let hsl = Hsl::from(Rgb::new(255, 0, 128));
        assert!(
            (0.0..360.0).contains(&hsl.h),
            "hue {} out of range",
            hsl.h
        );
        assert!(hsl.h > 300.0, "magenta hue should land near 330, got {}", hsl.h);
    }

    #[test]
    fn test_known_blue() {
        // #3B82F6, the default base color of the palette tool
        let hsl = Hsl::from(Rgb::new(0x3b, 0x82, 0xf6));
        assert_close(hsl.h, 217.2, "hue");
        assert_close(hsl.s, 91.2, "saturation");
        assert_close(hsl.l, 59.8, "lightness");
    }

    #[test]
    fn test_hue_offset_wraps() {
        let base = Hsl::new(350.0, 50.0, 50.0);
        assert_close(base.with_hue_offset(30.0).h, 20.0, "wrap over 360");
        assert_close(base.with_hue_offset(-360.0).h, 350.0, "full negative turn");

        let low = Hsl::new(10.0, 50.0, 50.0);
        assert_close(low.with_hue_offset(-30.0).h, 340.0, "wrap below 0");
    }

    #[test]
    fn test_component_setters_leave_rest_alone() {
        let base = Hsl::new(100.0, 40.0, 60.0);
        let s = base.with_saturation(70.0);
        assert_eq!((s.h, s.s, s.l), (100.0, 70.0, 60.0));
        let l = base.with_lightness(20.0);
        assert_eq!((l.h, l.s, l.l), (100.0, 40.0, 20.0));
    }
}
