//! CIE L*a*b* color type
//!
//! Lab is the clustering space of the k-means quantizer: squared Euclidean
//! distance between two `Lab` values is the cost function it minimizes.

use super::utils::{argb_from_lab, lab_from_argb};
use super::Argb;

/// CIE L*a*b* color (D65 white point).
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Nearest sRGB color, channels clamped.
    #[inline]
    pub fn to_argb(self) -> Argb {
        argb_from_lab(self.l, self.a, self.b)
    }
}

impl From<Argb> for Lab {
    #[inline]
    fn from(argb: Argb) -> Self {
        let [l, a, b] = lab_from_argb(argb);
        Self { l, a, b }
    }
}

impl From<Lab> for Argb {
    #[inline]
    fn from(lab: Lab) -> Self {
        lab.to_argb()
    }
}

impl From<[f64; 3]> for Lab {
    #[inline]
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }
}

impl From<Lab> for [f64; 3] {
    #[inline]
    fn from(lab: Lab) -> Self {
        [lab.l, lab.a, lab.b]
    }
}
