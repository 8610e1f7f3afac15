//! Harmony rule identifiers

use std::fmt;
use std::str::FromStr;

/// One of the four fixed harmony rules.
///
/// Each rule maps a base color to exactly five colors; the offsets are
/// design constants baked into [`Palette::derive()`](super::Palette::derive).
/// The rule name is also used in the CSS export variable prefix
/// (`--color-<rule>-<index>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyRule {
    /// Single hue, five lightness steps. Calm, cohesive swatches.
    Monochromatic,
    /// Neighbouring hues at +/-15 and +/-30 degrees.
    Analogous,
    /// The base plus four colors orbiting the opposite (180 degree) hue.
    Complementary,
    /// Three evenly spaced hues plus two saturation variants of the base.
    Triadic,
}

impl HarmonyRule {
    /// All rules, in display order.
    pub const ALL: [HarmonyRule; 4] = [
        HarmonyRule::Monochromatic,
        HarmonyRule::Analogous,
        HarmonyRule::Complementary,
        HarmonyRule::Triadic,
    ];

    /// The lowercase rule name used in CSS exports and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyRule::Monochromatic => "monochromatic",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Triadic => "triadic",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule(pub String);

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony rule '{}' (expected monochromatic, analogous, complementary or triadic)",
            self.0
        )
    }
}

impl std::error::Error for UnknownRule {}

impl FromStr for HarmonyRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(HarmonyRule::Monochromatic),
            "analogous" => Ok(HarmonyRule::Analogous),
            "complementary" => Ok(HarmonyRule::Complementary),
            "triadic" => Ok(HarmonyRule::Triadic),
            _ => Err(UnknownRule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for rule in HarmonyRule::ALL {
            let parsed: HarmonyRule = rule.name().parse().unwrap();
            assert_eq!(parsed, rule);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Triadic".parse::<HarmonyRule>().unwrap(),
            HarmonyRule::Triadic
        );
        assert_eq!(
            " ANALOGOUS ".parse::<HarmonyRule>().unwrap(),
            HarmonyRule::Analogous
        );
    }

    #[test]
    fn test_unknown_rule_error() {
        let err = "tetradic".parse::<HarmonyRule>().unwrap_err();
        assert!(err.to_string().contains("tetradic"));
    }
}
