//! The six tonal palettes derived from one seed color.

use crate::color::Argb;
use crate::hct::Hct;

use super::{PaletteRole, TonalPalette};

/// Hue and chroma of the fixed error palette.
const ERROR_HUE: f64 = 25.0;
const ERROR_CHROMA: f64 = 84.0;

/// Key palettes of a dynamic color theme.
///
/// Use [`CorePalette::of`] for the standard tonal style, where accents are
/// boosted to a minimum chroma, or [`CorePalette::content_of`] to follow the
/// seed's own chroma for content-driven themes.
///
/// # Example
///
/// ```
/// use hct_core::{Argb, CorePalette, PaletteRole};
///
/// let palette = CorePalette::of(Argb(0xFF4285F4));
/// assert_eq!(palette.tone(PaletteRole::Primary, 40), Argb(0xFF005AC5));
/// assert_eq!(palette.error.tone(40), Argb(0xFFBA1B1B));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorePalette {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalette {
    /// Tonal palettes for `seed`.
    ///
    /// Primary chroma is at least 48 so that even muted seeds give a
    /// colorful theme.
    pub fn of(seed: Argb) -> Self {
        let hct = Hct::from_argb(seed);
        Self::tonal(hct.hue(), hct.chroma())
    }

    /// Palettes that stay faithful to the seed's chroma.
    pub fn content_of(seed: Argb) -> Self {
        let hct = Hct::from_argb(seed);
        Self::content(hct.hue(), hct.chroma())
    }

    /// Rebuild every palette in place from a new seed.
    ///
    /// Previously solved tones are discarded. Takes `&mut self`, so callers
    /// sharing a palette must synchronize externally.
    pub fn reseed(&mut self, seed: Argb) {
        *self = Self::of(seed);
    }

    /// The palette playing `role`.
    pub fn palette(&self, role: PaletteRole) -> &TonalPalette {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Tertiary => &self.tertiary,
            PaletteRole::Neutral => &self.neutral,
            PaletteRole::NeutralVariant => &self.neutral_variant,
            PaletteRole::Error => &self.error,
        }
    }

    /// Color at `tone` in the palette playing `role`.
    pub fn tone(&self, role: PaletteRole, tone: u8) -> Argb {
        self.palette(role).tone(tone)
    }

    fn tonal(hue: f64, chroma: f64) -> Self {
        Self {
            primary: TonalPalette::from_hue_and_chroma(hue, chroma.max(48.0)),
            secondary: TonalPalette::from_hue_and_chroma(hue, 16.0),
            tertiary: TonalPalette::from_hue_and_chroma(hue + 60.0, 24.0),
            neutral: TonalPalette::from_hue_and_chroma(hue, 4.0),
            neutral_variant: TonalPalette::from_hue_and_chroma(hue, 8.0),
            error: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
        }
    }

    fn content(hue: f64, chroma: f64) -> Self {
        Self {
            primary: TonalPalette::from_hue_and_chroma(hue, chroma),
            secondary: TonalPalette::from_hue_and_chroma(hue, chroma / 3.0),
            tertiary: TonalPalette::from_hue_and_chroma(hue + 60.0, chroma / 2.0),
            neutral: TonalPalette::from_hue_and_chroma(hue, (chroma / 12.0).min(4.0)),
            neutral_variant: TonalPalette::from_hue_and_chroma(hue, (chroma / 6.0).min(8.0)),
            error: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TONES: [u8; 5] = [10, 40, 80, 90, 99];

    fn tones(palette: &TonalPalette) -> Vec<u32> {
        TONES.iter().map(|&t| palette.tone(t).value()).collect()
    }

    #[test]
    fn test_google_blue_seed() {
        let core = CorePalette::of(Argb(0xFF42_85F4));
        assert_eq!(
            tones(&core.primary),
            vec![0xFF00_1A43, 0xFF00_5AC5, 0xFFAC_C7FF, 0xFFD6_E2FF, 0xFFFD_FBFF]
        );
        assert_eq!(
            tones(&core.secondary),
            vec![0xFF14_1B2C, 0xFF57_5E71, 0xFFBF_C6DC, 0xFFDA_E2F9, 0xFFFD_FBFF]
        );
        assert_eq!(
            tones(&core.tertiary),
            vec![0xFF29_132D, 0xFF71_5574, 0xFFDE_BBDF, 0xFFFB_D7FB, 0xFFFF_FBFB]
        );
        assert_eq!(
            tones(&core.neutral),
            vec![0xFF1B_1B1E, 0xFF5E_5E61, 0xFFC7_C6CA, 0xFFE4_E2E6, 0xFFFD_FBFF]
        );
        assert_eq!(
            tones(&core.neutral_variant),
            vec![0xFF19_1B22, 0xFF5C_5E66, 0xFFC4_C6D0, 0xFFE1_E2EC, 0xFFFD_FBFF]
        );
        assert_eq!(
            tones(&core.error),
            vec![0xFF41_0001, 0xFFBA_1B1B, 0xFFFF_B4A9, 0xFFFF_DAD4, 0xFFFF_FBFA]
        );
    }

    #[test]
    fn test_palette_parameters() {
        let seed = Argb(0xFF42_85F4);
        let hct = Hct::from_argb(seed);
        let core = CorePalette::of(seed);
        assert_eq!(core.primary.hue(), hct.hue());
        assert_eq!(core.primary.chroma(), hct.chroma());
        assert_eq!(core.secondary.chroma(), 16.0);
        assert_eq!(core.tertiary.hue(), hct.hue() + 60.0);
        assert_eq!(core.tertiary.chroma(), 24.0);
        assert_eq!(core.neutral.chroma(), 4.0);
        assert_eq!(core.neutral_variant.chroma(), 8.0);
        assert_eq!(core.error.hue(), 25.0);
        assert_eq!(core.error.chroma(), 84.0);
    }

    #[test]
    fn test_muted_seed_gets_minimum_primary_chroma() {
        let core = CorePalette::of(Argb(0xFF80_7070));
        assert_eq!(core.primary.chroma(), 48.0);
    }

    #[test]
    fn test_content_palette_follows_seed_chroma() {
        let seed = Argb(0xFF42_85F4);
        let chroma = Hct::from_argb(seed).chroma();
        let core = CorePalette::content_of(seed);
        assert_eq!(core.primary.chroma(), chroma);
        assert_eq!(core.secondary.chroma(), chroma / 3.0);
        assert_eq!(core.tertiary.chroma(), chroma / 2.0);
        assert_eq!(core.neutral.chroma(), 4.0);
        assert_eq!(core.neutral_variant.chroma(), 8.0);

        let muted = CorePalette::content_of(Argb(0xFF80_7070));
        assert!(muted.primary.chroma() < 48.0);
        assert!(muted.neutral.chroma() < 4.0);
    }

    #[test]
    fn test_role_lookup() {
        let core = CorePalette::of(Argb(0xFF42_85F4));
        for role in PaletteRole::ALL {
            assert_eq!(core.tone(role, 40), core.palette(role).tone(40));
        }
        assert_eq!(core.tone(PaletteRole::Error, 40), Argb(0xFFBA_1B1B));
    }

    #[test]
    fn test_reseed_matches_fresh_palette() {
        let mut core = CorePalette::of(Argb(0xFF42_85F4));
        core.primary.tone(40);
        core.reseed(Argb(0xFFFF_0000));
        let fresh = CorePalette::of(Argb(0xFFFF_0000));
        assert_eq!(core, fresh);
        assert_eq!(core.primary.cached_len(), 0);
        assert_eq!(core.tone(PaletteRole::Primary, 40), fresh.tone(PaletteRole::Primary, 40));
    }
}
