//! CSS gradient generation.
//!
//! Two-color linear and radial gradients, eight fixed linear directions,
//! a randomizer and the six named presets from the original tool.

use std::fmt;
use std::str::FromStr;

use color_harmony::Rgb;

use crate::error::ToolError;

/// Linear gradient direction, one of eight 45-degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// All directions in clockwise order starting from the top.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// CSS angle, e.g. `45deg`.
    pub fn css(self) -> &'static str {
        match self {
            Direction::Top => "0deg",
            Direction::TopRight => "45deg",
            Direction::Right => "90deg",
            Direction::BottomRight => "135deg",
            Direction::Bottom => "180deg",
            Direction::BottomLeft => "225deg",
            Direction::Left => "270deg",
            Direction::TopLeft => "315deg",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Top => "Top",
            Direction::TopRight => "Top Right",
            Direction::Right => "Right",
            Direction::BottomRight => "Bottom Right",
            Direction::Bottom => "Bottom",
            Direction::BottomLeft => "Bottom Left",
            Direction::Left => "Left",
            Direction::TopLeft => "Top Left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

impl FromStr for Direction {
    type Err = ToolError;

    /// Parse a CSS angle (`45deg`). Only the eight 45-degree steps exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0deg" => Ok(Direction::Top),
            "45deg" => Ok(Direction::TopRight),
            "90deg" => Ok(Direction::Right),
            "135deg" => Ok(Direction::BottomRight),
            "180deg" => Ok(Direction::Bottom),
            "225deg" => Ok(Direction::BottomLeft),
            "270deg" => Ok(Direction::Left),
            "315deg" => Ok(Direction::TopLeft),
            other => Err(ToolError::UnknownDirection(other.to_string())),
        }
    }
}

/// Linear or radial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl FromStr for GradientKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            other => Err(ToolError::UnknownGradientKind(other.to_string())),
        }
    }
}

/// A two-color CSS gradient.
///
/// The direction only applies to linear gradients; radial gradients are
/// always centred circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub color1: Rgb,
    pub color2: Rgb,
    pub direction: Direction,
}

impl Gradient {
    /// The single CSS declaration for this gradient.
    ///
    /// ```
    /// use devbench::tools::{Direction, Gradient, GradientKind};
    ///
    /// let g = Gradient {
    ///     kind: GradientKind::Linear,
    ///     color1: "#3b82f6".parse().unwrap(),
    ///     color2: "#8b5cf6".parse().unwrap(),
    ///     direction: Direction::TopRight,
    /// };
    /// assert_eq!(
    ///     g.css(),
    ///     "background: linear-gradient(45deg, #3b82f6, #8b5cf6);"
    /// );
    /// ```
    pub fn css(&self) -> String {
        match self.kind {
            GradientKind::Linear => format!(
                "background: linear-gradient({}, {}, {});",
                self.direction, self.color1, self.color2
            ),
            GradientKind::Radial => format!(
                "background: radial-gradient(circle, {}, {});",
                self.color1, self.color2
            ),
        }
    }

    /// A small standalone stylesheet wrapping [`Gradient::css()`],
    /// matching the downloadable `gradient.css` of the original tool.
    pub fn stylesheet(&self) -> String {
        format!(
            ".gradient {{\n  {}\n  width: 100%;\n  height: 100%;\n}}",
            self.css()
        )
    }

    /// Random colors and a random direction; the kind is kept.
    pub fn randomize(self) -> Self {
        use rand::seq::SliceRandom;
        use rand::Rng;

        let mut rng = rand::thread_rng();
        Self {
            color1: Rgb::from_u24(rng.gen_range(0..0x1000000)),
            color2: Rgb::from_u24(rng.gen_range(0..0x1000000)),
            direction: *Direction::ALL.choose(&mut rng).expect("non-empty"),
            ..self
        }
    }
}

impl Default for Gradient {
    /// The original tool's initial state: blue to violet at 45 degrees.
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            color1: Rgb::new(0x3b, 0x82, 0xf6),
            color2: Rgb::new(0x8b, 0x5c, 0xf6),
            direction: Direction::TopRight,
        }
    }
}

/// A named gradient preset.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub color1: Rgb,
    pub color2: Rgb,
    pub direction: Direction,
}

/// The preset gallery from the original tool.
pub const PRESETS: [Preset; 6] = [
    Preset {
        name: "Ocean Blue",
        color1: Rgb { r: 0x66, g: 0x7e, b: 0xea },
        color2: Rgb { r: 0x76, g: 0x4b, b: 0xa2 },
        direction: Direction::TopRight,
    },
    Preset {
        name: "Sunset",
        color1: Rgb { r: 0xf0, g: 0x93, b: 0xfb },
        color2: Rgb { r: 0xf5, g: 0x57, b: 0x6c },
        direction: Direction::BottomRight,
    },
    Preset {
        name: "Forest",
        color1: Rgb { r: 0x11, g: 0x99, b: 0x8e },
        color2: Rgb { r: 0x38, g: 0xef, b: 0x7d },
        direction: Direction::Right,
    },
    Preset {
        name: "Purple Haze",
        color1: Rgb { r: 0x66, g: 0x7e, b: 0xea },
        color2: Rgb { r: 0x76, g: 0x4b, b: 0xa2 },
        direction: Direction::Bottom,
    },
    Preset {
        name: "Fire",
        color1: Rgb { r: 0xf1, g: 0x27, b: 0x11 },
        color2: Rgb { r: 0xf5, g: 0xaf, b: 0x19 },
        direction: Direction::TopRight,
    },
    Preset {
        name: "Ice",
        color1: Rgb { r: 0xa8, g: 0xed, b: 0xea },
        color2: Rgb { r: 0xfe, g: 0xd6, b: 0xe3 },
        direction: Direction::Right,
    },
];

impl Preset {
    /// Look up a preset by name, case-insensitively.
    pub fn find(name: &str) -> Result<Gradient, ToolError> {
        PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .map(|p| Gradient {
                kind: GradientKind::Linear,
                color1: p.color1,
                color2: p.color2,
                direction: p.direction,
            })
            .ok_or_else(|| ToolError::UnknownPreset(name.to_string()))
    }
}
