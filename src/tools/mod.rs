//! Pure (input, mode) -> output utilities.
//!
//! Each tool is a stateless function from an input string to an output
//! string or a descriptive [`ToolError`](crate::error::ToolError). No
//! state crosses invocations.

pub mod base64;
pub mod code;
pub mod gradient;
pub mod json;

pub use gradient::{Direction, Gradient, GradientKind, Preset};

use color_harmony::Rgb;
use rand::Rng;

/// Draw a uniform-random 24-bit color.
pub fn random_rgb() -> Rgb {
    Rgb::from_u24(rand::thread_rng().gen_range(0..0x1000000))
}
