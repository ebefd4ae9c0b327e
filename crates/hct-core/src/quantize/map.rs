//! Exact histogram quantizer.

use super::{Quantizer, QuantizerResult};
use crate::color::Argb;

/// Counts every distinct opaque color.
///
/// Colors appear in the order they are first seen. `max_colors` is not
/// applied; the result has one entry per distinct opaque pixel value.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizerMap;

impl QuantizerMap {
    /// Histogram of the opaque pixels in `pixels`.
    pub fn histogram(pixels: &[Argb]) -> QuantizerResult {
        let mut result = QuantizerResult::new();
        for &pixel in pixels.iter().filter(|p| p.is_opaque()) {
            let count = result.color_to_count.entry(pixel).or_insert(0);
            *count = count.saturating_add(1);
        }
        tracing::debug!(
            pixels = pixels.len(),
            distinct = result.len(),
            "built color histogram"
        );
        result
    }
}

impl Quantizer for QuantizerMap {
    fn quantize(&self, pixels: &[Argb], _max_colors: usize) -> QuantizerResult {
        Self::histogram(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let pixels = [
            Argb(0xFF00_00FF),
            Argb(0xFFFF_0000),
            Argb(0xFF00_00FF),
            Argb(0xFF00_00FF),
        ];
        let result = QuantizerMap.quantize(&pixels, 1);
        let pairs: Vec<(Argb, u32)> = result.iter().collect();
        assert_eq!(pairs, vec![(Argb(0xFF00_00FF), 3), (Argb(0xFFFF_0000), 1)]);
    }

    #[test]
    fn test_skips_translucent_pixels() {
        let pixels = [Argb(0x80FF_0000), Argb(0x00FF_FFFF), Argb(0xFF12_3456)];
        let result = QuantizerMap::histogram(&pixels);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(Argb(0xFF12_3456)), Some(1));
    }

    #[test]
    fn test_empty_input() {
        assert!(QuantizerMap::histogram(&[]).is_empty());
    }
}
