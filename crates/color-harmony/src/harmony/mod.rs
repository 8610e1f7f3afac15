//! Harmony rule engine
//!
//! Derives five-color palettes from a single base color using fixed
//! hue, saturation and lightness offsets. Four rules are supported:
//! monochromatic, analogous, complementary and triadic.
//!
//! # Example
//!
//! ```
//! use color_harmony::{HarmonyRule, Palette, Rgb};
//!
//! let base: Rgb = "#3b82f6".parse().unwrap();
//! for palette in Palette::derive_all(base) {
//!     println!("{}: {:?}", palette.rule(), palette.colors());
//! }
//! ```

mod palette;
mod rule;

pub use palette::Palette;
pub use rule::{HarmonyRule, UnknownRule};
