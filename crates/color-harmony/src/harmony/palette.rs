//! Palette derivation and CSS export.
//!
//! A `Palette` is one harmony rule applied to one base color: exactly five
//! `Rgb` values whose order is the left-to-right display order and the
//! index used in CSS variable names.

use super::rule::HarmonyRule;
use crate::color::{Hsl, Rgb};

/// A five-color palette produced by one harmony rule.
///
/// The base color is carried into the palette verbatim at the rule's
/// anchor position (index 2 for monochromatic, analogous and
/// complementary; index 0 for triadic), so it survives exactly even
/// though the other entries go through an HSL round trip that may shift
/// channels by one unit.
///
/// # Offset Tables
///
/// With `(h, s, l)` the base color's HSL components:
///
/// | Rule | Entries |
/// |------|---------|
/// | Monochromatic | lightness `max(10, l-40)`, `max(20, l-20)`, base, `min(80, l+20)`, `min(90, l+40)` |
/// | Analogous | hue `-30`, `-15`, base, `+15`, `+30` |
/// | Complementary | hue `+180`, `+150`, base, `+210`, `+240` |
/// | Triadic | base, hue `+120`, `+240`, saturation `max(20, s-30)`, `min(80, s+30)` |
///
/// Hue offsets wrap modulo 360 with a positive result. The complementary
/// rule is intentionally not a two-color complement: four entries orbit
/// the opposite hue. These constants are fixed by design.
///
/// # Example
///
/// ```
/// use color_harmony::{HarmonyRule, Palette, Rgb};
///
/// let base: Rgb = "#3b82f6".parse().unwrap();
/// let triadic = Palette::derive(HarmonyRule::Triadic, base);
/// assert_eq!(triadic.colors()[0], base);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    rule: HarmonyRule,
    colors: [Rgb; 5],
}

impl Palette {
    /// Derive the palette for `rule` from `base`.
    pub fn derive(rule: HarmonyRule, base: Rgb) -> Self {
        let hsl = Hsl::from(base);
        let shift = |degrees: f64| Rgb::from(hsl.with_hue_offset(degrees));

        let colors = match rule {
            HarmonyRule::Monochromatic => [
                Rgb::from(hsl.with_lightness((hsl.l - 40.0).max(10.0))),
                Rgb::from(hsl.with_lightness((hsl.l - 20.0).max(20.0))),
                base,
                Rgb::from(hsl.with_lightness((hsl.l + 20.0).min(80.0))),
                Rgb::from(hsl.with_lightness((hsl.l + 40.0).min(90.0))),
            ],
            HarmonyRule::Analogous => {
                [shift(-30.0), shift(-15.0), base, shift(15.0), shift(30.0)]
            }
            HarmonyRule::Complementary => {
                [shift(180.0), shift(150.0), base, shift(210.0), shift(240.0)]
            }
            HarmonyRule::Triadic => [
                base,
                shift(120.0),
                shift(240.0),
                Rgb::from(hsl.with_saturation((hsl.s - 30.0).max(20.0))),
                Rgb::from(hsl.with_saturation((hsl.s + 30.0).min(80.0))),
            ],
        };

        Self { rule, colors }
    }

    /// Derive all four palettes from one base color, in display order.
    pub fn derive_all(base: Rgb) -> [Palette; 4] {
        HarmonyRule::ALL.map(|rule| Palette::derive(rule, base))
    }

    /// The rule this palette was derived with.
    pub fn rule(&self) -> HarmonyRule {
        self.rule
    }

    /// The five colors in display order.
    pub fn colors(&self) -> &[Rgb; 5] {
        &self.colors
    }

    /// Render the palette as a CSS custom-property block.
    ///
    /// Variables are named `--color-<rule>-<index>` with 1-based indices
    /// matching the display order:
    ///
    /// ```text
    /// :root {
    /// --color-triadic-1: #3b82f6;
    /// ...
    /// }
    /// ```
    pub fn to_css(&self) -> String {
        let vars: Vec<String> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| format!("--color-{}-{}: {};", self.rule.name(), i + 1, color))
            .collect();
        format!(":root {{\n{}\n}}", vars.join("\n"))
    }
}
