//! Wu followed by weighted k-means.

use super::{Quantizer, QuantizerResult, QuantizerWsmeans, QuantizerWu};
use crate::color::Argb;

/// The default image quantizer.
///
/// Wu's box cuts give a fast, well-spread set of initial colors; Wsmeans
/// then refines them and assigns populations. The result follows Wu's color
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizerCelebi;

impl Quantizer for QuantizerCelebi {
    fn quantize(&self, pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        let wu_colors: Vec<Argb> = QuantizerWu.quantize(pixels, max_colors).colors().collect();
        QuantizerWsmeans::new().quantize_with_clusters(pixels, &wu_colors, max_colors)
    }
}
