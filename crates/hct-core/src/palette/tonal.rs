//! A single hue and chroma swept across every tone.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::color::Argb;
use crate::hct::Hct;

/// All tones of one hue at one requested chroma.
///
/// Tones are solved lazily and memoized, so repeated lookups of the same tone
/// return the same color without re-running gamut mapping. The cache is
/// safe to share between threads.
///
/// # Example
///
/// ```
/// use hct_core::{Argb, TonalPalette};
///
/// let palette = TonalPalette::from_hue_and_chroma(270.0, 36.0);
/// assert_eq!(palette.tone(0), Argb::BLACK);
/// assert_eq!(palette.tone(100), Argb::WHITE);
/// ```
#[derive(Debug)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    cache: RwLock<HashMap<u8, Argb>>,
}

impl TonalPalette {
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Palette with the hue and chroma of `argb`.
    pub fn from_argb(argb: Argb) -> Self {
        let hct = Hct::from_argb(argb);
        Self::from_hue_and_chroma(hct.hue(), hct.chroma())
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// The requested chroma. Individual tones may have less.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Color at `tone` (L*, 0..=100; larger values give white).
    pub fn tone(&self, tone: u8) -> Argb {
        // A poisoned lock still holds a consistent map of solved tones
        if let Some(&argb) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tone)
        {
            return argb;
        }

        let argb = Hct::new(self.hue, self.chroma, f64::from(tone)).to_argb();
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tone, argb);
        argb
    }

    /// Number of memoized tones.
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Clone for TonalPalette {
    fn clone(&self) -> Self {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            hue: self.hue,
            chroma: self.chroma,
            cache: RwLock::new(cache),
        }
    }
}

impl PartialEq for TonalPalette {
    /// Palettes are equal when they were built from the same hue and chroma.
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma
    }
}
