//! color-harmony: Hex/HSL conversion and harmony-rule palettes
//!
//! This library derives related color palettes from a single base color
//! using fixed harmony rules (monochromatic, analogous, complementary,
//! triadic).
//!
//! # Quick Start
//!
//! [`Palette::derive()`] is the primary entry point:
//!
//! ```
//! use color_harmony::{HarmonyRule, Palette, Rgb};
//!
//! let base: Rgb = "#3B82F6".parse().unwrap();
//! let palette = Palette::derive(HarmonyRule::Monochromatic, base);
//!
//! // The base color always appears verbatim at the rule's anchor position.
//! assert_eq!(palette.colors()[2], base);
//! assert_eq!(palette.colors().len(), 5);
//! ```
//!
//! # Color Types
//!
//! Two representations, each with a specific job:
//!
//! - [`Rgb`]: a 24-bit color, the canonical `#rrggbb` form used for all
//!   input and output.
//! - [`Hsl`]: hue/saturation/lightness, derived from an [`Rgb`] on demand
//!   and never stored. All palette math happens here because the harmony
//!   rules are defined as hue and lightness offsets.
//!
//! Conversion both ways is exposed through `From` impls. The round trip
//! `Rgb -> Hsl -> Rgb` reproduces the original within one unit per channel
//! for chromatic colors; achromatic colors (all channels equal) collapse to
//! hue 0 / saturation 0 by definition, which is a documented edge case of
//! the HSL model rather than an error.
//!
//! # Harmony Rules
//!
//! Each of the four [`HarmonyRule`]s maps one base color to exactly five
//! colors. The offsets and clamps are fixed design constants, chosen for
//! their visual output, and deliberately not configurable. In particular
//! the complementary rule is not a textbook two-color complement: four of
//! its five entries orbit the 180-degree hue, which produces a richer
//! swatch row. See [`Palette::derive()`] for the exact tables.

pub mod color;
pub mod harmony;


pub use color::{Hsl, ParseColorError, Rgb};
pub use harmony::{HarmonyRule, Palette, UnknownRule};
