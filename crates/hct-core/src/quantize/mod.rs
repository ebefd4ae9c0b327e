//! Color quantization
//!
//! Quantizers reduce the pixels of an image to a small set of representative
//! colors, each with the number of pixels it stands for.
//!
//! # Algorithms
//!
//! - **Map**: exact histogram of opaque pixels, no reduction
//! - **Wu**: variance-minimizing box cuts on a 32x32x32 color cube; fast,
//!   used to seed the clustering stage (populations are zero)
//! - **Wsmeans**: weighted k-means in L*a*b* with triangle-inequality pruning
//! - **Celebi**: Wu followed by Wsmeans seeded with Wu's colors (default)
//!
//! # Architecture
//!
//! All algorithms implement the [`Quantizer`] trait. Results are returned as
//! a [`QuantizerResult`], an insertion-ordered map from color to population.
//! The order is deterministic for a given input.
//!
//! # Example
//!
//! ```
//! use hct_core::{Argb, Quantizer, QuantizerCelebi};
//!
//! let pixels = [Argb(0xFFFF0000), Argb(0xFF00FF00), Argb(0xFF0000FF)];
//! let result = QuantizerCelebi.quantize(&pixels, 128);
//! assert_eq!(result.len(), 3);
//! ```

mod celebi;
mod map;
mod point_provider;
mod wsmeans;
mod wu;

pub use celebi::QuantizerCelebi;
pub use map::QuantizerMap;
pub use point_provider::{PointProvider, PointProviderLab};
pub use wsmeans::QuantizerWsmeans;
pub use wu::QuantizerWu;

use indexmap::IndexMap;

use crate::color::Argb;

/// Trait for color quantization algorithms.
pub trait Quantizer {
    /// Reduce `pixels` to at most `max_colors` representative colors.
    ///
    /// Pixels that are not fully opaque are ignored, and an empty input
    /// gives an empty result.
    fn quantize(&self, pixels: &[Argb], max_colors: usize) -> QuantizerResult;
}

/// Colors produced by a quantizer with their pixel populations.
///
/// Iteration follows insertion order, which each quantizer documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuantizerResult {
    color_to_count: IndexMap<Argb, u32>,
}

impl QuantizerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.color_to_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.color_to_count.is_empty()
    }

    /// Population of `color`, if present.
    #[inline]
    pub fn get(&self, color: Argb) -> Option<u32> {
        self.color_to_count.get(&color).copied()
    }

    #[inline]
    pub fn contains(&self, color: Argb) -> bool {
        self.color_to_count.contains_key(&color)
    }

    /// Colors in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = Argb> + '_ {
        self.color_to_count.keys().copied()
    }

    /// `(color, population)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Argb, u32)> + '_ {
        self.color_to_count.iter().map(|(&color, &count)| (color, count))
    }

    /// Sum of all populations.
    pub fn total_population(&self) -> u64 {
        self.color_to_count.values().map(|&count| u64::from(count)).sum()
    }

    /// Insert or replace the population of `color`.
    ///
    /// A replaced color keeps its original position.
    pub fn insert(&mut self, color: Argb, count: u32) -> Option<u32> {
        self.color_to_count.insert(color, count)
    }
}

impl From<IndexMap<Argb, u32>> for QuantizerResult {
    fn from(color_to_count: IndexMap<Argb, u32>) -> Self {
        Self { color_to_count }
    }
}

impl FromIterator<(Argb, u32)> for QuantizerResult {
    fn from_iter<I: IntoIterator<Item = (Argb, u32)>>(iter: I) -> Self {
        Self {
            color_to_count: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for QuantizerResult {
    type Item = (Argb, u32);
    type IntoIter = indexmap::map::IntoIter<Argb, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.color_to_count.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_keeps_insertion_order() {
        let result: QuantizerResult = [
            (Argb(0xFF00_00FF), 3),
            (Argb(0xFFFF_0000), 1),
            (Argb(0xFF00_FF00), 2),
        ]
        .into_iter()
        .collect();
        let colors: Vec<Argb> = result.colors().collect();
        assert_eq!(colors, vec![Argb(0xFF00_00FF), Argb(0xFFFF_0000), Argb(0xFF00_FF00)]);
        assert_eq!(result.total_population(), 6);
        assert_eq!(result.get(Argb(0xFF00_FF00)), Some(2));
        assert_eq!(result.get(Argb::WHITE), None);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut result = QuantizerResult::new();
        assert!(result.is_empty());
        result.insert(Argb::BLACK, 1);
        result.insert(Argb::WHITE, 2);
        assert_eq!(result.insert(Argb::BLACK, 5), Some(1));
        let pairs: Vec<(Argb, u32)> = result.iter().collect();
        assert_eq!(pairs, vec![(Argb::BLACK, 5), (Argb::WHITE, 2)]);
    }
}
