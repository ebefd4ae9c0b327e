//! Packed 32-bit ARGB color type
//!
//! Every color that crosses the public API of this crate is an [`Argb`]:
//! pixels going into the quantizers, seeds going into palettes and tones
//! coming out of them. The numeric transforms work on `f64` internally and
//! only pack into `Argb` at their edges.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit was found
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// A color packed as `0xAARRGGBB`.
///
/// Alpha is carried through but the color science in this crate only
/// operates on fully opaque colors. Quantizers drop non-opaque pixels and
/// every color produced by a conversion has alpha `0xFF`.
///
/// # Example
///
/// ```
/// use hct_core::Argb;
///
/// let blue = Argb::from_rgb(0x42, 0x85, 0xF4);
/// assert_eq!(blue, Argb(0xFF4285F4));
/// assert_eq!(blue.red(), 0x42);
/// assert!(blue.is_opaque());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_channels(0xFF, red, green, blue)
    }

    /// Create a color from all four 8-bit channels.
    #[inline]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True when alpha is `0xFF`.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

impl fmt::Display for Argb {
    /// Formats as `#AARRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RGB` / `RGB` - shorthand, each digit doubled, opaque
    /// - `#RRGGBB` / `RRGGBB` - opaque
    /// - `#AARRGGBB` / `AARRGGBB` - explicit alpha
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hct_core::Argb;
    ///
    /// let red: Argb = "#F00".parse().unwrap();
    /// assert_eq!(red, Argb(0xFFFF0000));
    ///
    /// let translucent: Argb = "80ff0000".parse().unwrap();
    /// assert_eq!(translucent.alpha(), 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        let digits = s
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => u32::from(b - b'0'),
                b'a'..=b'f' => u32::from(b - b'a' + 10),
                _ => u32::from(b - b'A' + 10),
            })
            .fold(0u64, |acc, d| (acc << 4) | u64::from(d));

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = ((digits >> 8) & 0xF) as u8 * 17;
                let g = ((digits >> 4) & 0xF) as u8 * 17;
                let b = (digits & 0xF) as u8 * 17;
                Ok(Self::from_rgb(r, g, b))
            }
            6 => Ok(Argb(0xFF00_0000 | digits as u32)),
            8 => Ok(Argb(digits as u32)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let color = Argb(0x80C0_4020);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0xC0);
        assert_eq!(color.green(), 0x40);
        assert_eq!(color.blue(), 0x20);
        assert!(!color.is_opaque());
        assert_eq!(Argb::from_channels(0x80, 0xC0, 0x40, 0x20), color);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let color = Argb::from_rgb(1, 2, 3);
        assert_eq!(color.value(), 0xFF01_0203);
        assert!(color.is_opaque());
    }

    #[test]
    fn test_display_is_uppercase_hex_with_alpha() {
        assert_eq!(Argb(0xFF42_85F4).to_string(), "#FF4285F4");
        assert_eq!(Argb(0x0000_0001).to_string(), "#00000001");
    }

    #[test]
    fn test_hex_parsing_6digit() {
        assert_eq!("#FFFFFF".parse::<Argb>().unwrap(), Argb::WHITE);
        assert_eq!("000000".parse::<Argb>().unwrap(), Argb::BLACK);
        assert_eq!("#4285f4".parse::<Argb>().unwrap(), Argb(0xFF42_85F4));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        assert_eq!("#ABC".parse::<Argb>().unwrap(), Argb(0xFFAA_BBCC));
        assert_eq!("f00".parse::<Argb>().unwrap(), Argb(0xFFFF_0000));
    }

    #[test]
    fn test_hex_parsing_8digit_keeps_alpha() {
        let color: Argb = "#00FF0000".parse().unwrap();
        assert_eq!(color.alpha(), 0);
        assert_eq!(color.red(), 0xFF);
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Argb = "  #ABCDEF  ".parse().unwrap();
        let lower: Argb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!("#GGG".parse::<Argb>(), Err(ParseColorError::InvalidDigit('G')));
        assert_eq!("#FFFF".parse::<Argb>(), Err(ParseColorError::InvalidLength(4)));
        assert_eq!("".parse::<Argb>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<Argb>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("+FFFFF".parse::<Argb>(), Err(ParseColorError::InvalidDigit('+')));
        assert_eq!("#ÄBC".parse::<Argb>(), Err(ParseColorError::InvalidDigit('Ä')));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let color = Argb(0x12_34_56_78);
        assert_eq!(color.to_string().parse::<Argb>().unwrap(), color);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Argb(0xFF42_85F4)).unwrap();
        assert_eq!(json, "\"#FF4285F4\"");
        let back: Argb = serde_json::from_str("\"#4285F4\"").unwrap();
        assert_eq!(back, Argb(0xFF42_85F4));
        assert!(serde_json::from_str::<Argb>("\"nope\"").is_err());
    }
}
