//! Names of the six tonal palettes in a [`CorePalette`](super::CorePalette).

use std::fmt;
use std::str::FromStr;

use super::error::ParseRoleError;

/// One of the six tonal palettes derived from a seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    /// Accent 1, the seed hue at high chroma.
    Primary,
    /// Accent 2, the seed hue at low chroma.
    Secondary,
    /// Accent 3, the seed hue rotated by 60 degrees.
    Tertiary,
    /// Near-gray with a hint of the seed hue.
    Neutral,
    /// Near-gray, slightly more chromatic than [`Neutral`](Self::Neutral).
    NeutralVariant,
    /// Fixed red used for error states.
    Error,
}

impl PaletteRole {
    /// All roles in declaration order.
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Tertiary,
        PaletteRole::Neutral,
        PaletteRole::NeutralVariant,
        PaletteRole::Error,
    ];

    /// The snake_case name used in text formats.
    pub const fn as_str(self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Tertiary => "tertiary",
            PaletteRole::Neutral => "neutral",
            PaletteRole::NeutralVariant => "neutral_variant",
            PaletteRole::Error => "error",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteRole {
    type Err = ParseRoleError;

    /// Accepts the snake_case name, the Android accent names (`a1`, `a2`,
    /// `a3`, `n1`, `n2`) and camelCase `neutralVariant`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "a1" => Ok(PaletteRole::Primary),
            "secondary" | "a2" => Ok(PaletteRole::Secondary),
            "tertiary" | "a3" => Ok(PaletteRole::Tertiary),
            "neutral" | "n1" => Ok(PaletteRole::Neutral),
            "neutral_variant" | "neutralvariant" | "n2" => Ok(PaletteRole::NeutralVariant),
            "error" => Ok(PaletteRole::Error),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PaletteRole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PaletteRole {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
