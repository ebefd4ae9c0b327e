//! Color space used by k-means clustering.

use crate::color::{Argb, Lab};

/// Maps colors to points in the space where clustering happens.
///
/// `distance` must be monotonic in true distance; the quantizer's pruning
/// assumes it is a squared Euclidean distance.
pub trait PointProvider: Sync {
    fn from_argb(&self, argb: Argb) -> [f64; 3];
    fn to_argb(&self, point: [f64; 3]) -> Argb;
    fn distance(&self, a: &[f64; 3], b: &[f64; 3]) -> f64;
}

/// Clusters in CIE L*a*b* with squared Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointProviderLab;

impl PointProvider for PointProviderLab {
    #[inline]
    fn from_argb(&self, argb: Argb) -> [f64; 3] {
        Lab::from(argb).into()
    }

    #[inline]
    fn to_argb(&self, point: [f64; 3]) -> Argb {
        Lab::from(point).to_argb()
    }

    #[inline]
    fn distance(&self, a: &[f64; 3], b: &[f64; 3]) -> f64 {
        Lab::from(*a).distance_squared(&Lab::from(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_provider_round_trip() {
        let provider = PointProviderLab;
        let point = provider.from_argb(Argb(0xFF42_85F4));
        assert_eq!(provider.to_argb(point), Argb(0xFF42_85F4));
    }

    #[test]
    fn test_distance_is_squared() {
        let provider = PointProviderLab;
        assert_eq!(provider.distance(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]), 25.0);
    }
}
