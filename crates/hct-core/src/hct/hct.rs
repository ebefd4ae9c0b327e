//! Hue, chroma and tone color type

use crate::cam::{Cam16, ViewingConditions};
use crate::color::math::{clamp_double, sanitize_degrees};
use crate::color::{lstar_from_argb, Argb};

use super::solver::solve_to_argb;

/// A color described by CAM16 hue and chroma plus CIE L* as tone.
///
/// An `Hct` always denotes a displayable sRGB color. Constructing one from
/// out-of-gamut coordinates maps them to the closest sRGB color with the
/// same tone, and the stored hue, chroma and tone are those of the mapped
/// color rather than the requested ones.
///
/// # Example
///
/// ```
/// use hct_core::Hct;
///
/// // Chroma 200 is far outside sRGB at this hue and tone
/// let color = Hct::new(120.0, 200.0, 50.0);
/// assert!(color.chroma() < 60.0);
/// assert!((color.tone() - 50.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Closest sRGB color to the requested coordinates.
    ///
    /// Hue is wrapped into `[0, 360)` and tone clamped to `[0, 100]`.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        let hue = sanitize_degrees(hue);
        let tone = clamp_double(0.0, 100.0, tone);
        Self::from_argb(solve_to_argb(hue, chroma, tone, ViewingConditions::standard()))
    }

    /// Exact HCT coordinates of an sRGB color.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// CIE L*, `[0, 100]`.
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Change the hue, keeping chroma and tone where the gamut allows.
    pub fn set_hue(&mut self, hue: f64) {
        *self = Self::new(hue, self.chroma, self.tone);
    }

    /// Change the chroma, keeping hue and tone where the gamut allows.
    pub fn set_chroma(&mut self, chroma: f64) {
        *self = Self::new(self.hue, chroma, self.tone);
    }

    /// Change the tone, keeping hue and chroma where the gamut allows.
    pub fn set_tone(&mut self, tone: f64) {
        *self = Self::new(self.hue, self.chroma, tone);
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_reports_exact_coordinates() {
        let hct = Hct::from_argb(Argb(0xFF42_85F4));
        assert!((hct.hue() - 265.97939535792614).abs() < 1e-6);
        assert!((hct.chroma() - 62.26911127457101).abs() < 1e-6);
        assert!((hct.tone() - 56.55034873735502).abs() < 1e-6);
        assert_eq!(hct.to_argb(), Argb(0xFF42_85F4));
    }

    #[test]
    fn test_new_stores_mapped_coordinates() {
        let hct = Hct::new(120.0, 200.0, 50.0);
        let exact = Hct::from_argb(hct.to_argb());
        assert_eq!(hct, exact);
        assert!((hct.hue() - 121.04).abs() < 0.01, "hue {}", hct.hue());
        assert!((hct.chroma() - 53.29).abs() < 0.01, "chroma {}", hct.chroma());
        assert!((hct.tone() - 49.86).abs() < 0.01, "tone {}", hct.tone());
    }

    #[test]
    fn test_in_gamut_request_is_close() {
        let hct = Hct::new(270.0, 36.0, 50.0);
        assert!((hct.hue() - 270.44).abs() < 0.01, "hue {}", hct.hue());
        assert!((hct.chroma() - 36.13).abs() < 0.01, "chroma {}", hct.chroma());
        assert!((hct.tone() - 50.18).abs() < 0.01, "tone {}", hct.tone());
    }

    #[test]
    fn test_hue_wraps_and_tone_clamps() {
        assert_eq!(Hct::new(-90.0, 36.0, 50.0), Hct::new(270.0, 36.0, 50.0));
        assert_eq!(Hct::new(630.0, 36.0, 50.0), Hct::new(270.0, 36.0, 50.0));
        assert_eq!(Hct::new(120.0, 60.0, 150.0).to_argb(), Argb::WHITE);
        assert_eq!(Hct::new(120.0, 60.0, -20.0).to_argb(), Argb::BLACK);
    }

    #[test]
    fn test_setters_remap() {
        let mut hct = Hct::from_argb(Argb(0xFF42_85F4));
        hct.set_tone(90.0);
        assert!((hct.tone() - 90.0).abs() < 0.5);
        assert!((hct.hue() - 266.0).abs() < 3.0);

        hct.set_chroma(0.0);
        // CAM16 grays are not perfectly achromatic
        assert!(hct.chroma() < 3.0);
        let gray = hct.to_argb();
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());

        let mut hct = Hct::from_argb(Argb(0xFF42_85F4));
        hct.set_hue(hct.hue() + 180.0);
        assert!((hct.hue() - 86.0).abs() < 5.0, "hue {}", hct.hue());
    }

    #[test]
    fn test_round_trip_sampled_colors() {
        let mut checked = 0;
        for value in (0xFF00_0000u32..=0xFFFF_FFFF).step_by(6969) {
            let argb = Argb(value);
            let hct = Hct::from_argb(argb);
            // Near-white, near-black and near-gray requests take the gray shortcut
            if hct.chroma() < 1.0 || hct.tone().round() <= 0.0 || hct.tone().round() >= 100.0 {
                continue;
            }
            let solved = Hct::new(hct.hue(), hct.chroma(), hct.tone());
            assert_eq!(solved.to_argb(), argb, "round trip of {argb}");
            checked += 1;
        }
        assert!(checked > 2000);
    }
}
