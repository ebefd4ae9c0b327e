//! Ranking of quantized colors as theme seeds.

use crate::cam::Cam16;
use crate::color::math::{difference_degrees, sanitize_degrees_int};
use crate::color::{lstar_from_argb, Argb};
use crate::quantize::QuantizerResult;

/// Weight of a color's hue neighbourhood share (as a percentage) in its score.
const WEIGHT_PROPORTION: f64 = 0.7;
const WEIGHT_CHROMA_ABOVE: f64 = 0.3;
const WEIGHT_CHROMA_BELOW: f64 = 0.1;
/// Chroma that neither adds to nor subtracts from a score.
const TARGET_CHROMA: f64 = 48.0;
const CUTOFF_CHROMA: f64 = 15.0;
const CUTOFF_TONE: f64 = 10.0;
const CUTOFF_EXCITED_PROPORTION: f64 = 0.01;
/// Survivors must differ in hue by at least this many degrees.
const MIN_HUE_DIFFERENCE: f64 = 15.0;
/// Hue buckets on each side counted towards a color's neighbourhood.
const HUE_WINDOW: i32 = 15;

/// Fallback when no color qualifies: Google Blue.
pub const DEFAULT_SEED: Argb = Argb(0xFF42_85F4);

/// Ranks colors by how well they would serve as a theme seed.
///
/// Colors are favoured when their hue family covers a large share of the
/// image and when they are reasonably colorful. Muddy, dark or rare colors
/// are dropped, and among colors of nearly the same hue only the best one
/// survives.
///
/// # Example
///
/// ```
/// use hct_core::{Argb, QuantizerResult, Scorer};
///
/// let colors: QuantizerResult = [(Argb(0xFF000000), 1)].into_iter().collect();
/// assert_eq!(Scorer::score(&colors), vec![Argb(0xFF4285F4)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

struct Candidate {
    argb: Argb,
    cam: Cam16,
    excited_proportion: f64,
    score: f64,
}

impl Scorer {
    /// Seed candidates, best first. Never empty.
    pub fn score(colors_to_population: &QuantizerResult) -> Vec<Argb> {
        let total = colors_to_population.total_population() as f64;

        let mut hue_proportions = [0.0f64; 361];
        let cams: Vec<(Argb, Cam16)> = colors_to_population
            .iter()
            .map(|(argb, population)| {
                let cam = Cam16::from_argb(argb);
                let proportion = if total > 0.0 { f64::from(population) / total } else { 0.0 };
                hue_proportions[cam.hue().round() as usize] += proportion;
                (argb, cam)
            })
            .collect();

        let mut candidates: Vec<Candidate> = cams
            .into_iter()
            .map(|(argb, cam)| {
                let hue = cam.hue().round() as i32;
                let excited_proportion: f64 = (hue - HUE_WINDOW..hue + HUE_WINDOW)
                    .map(|j| hue_proportions[sanitize_degrees_int(j) as usize])
                    .sum();

                let proportion_score = excited_proportion * 100.0 * WEIGHT_PROPORTION;
                let chroma_weight = if cam.chroma() < TARGET_CHROMA {
                    WEIGHT_CHROMA_BELOW
                } else {
                    WEIGHT_CHROMA_ABOVE
                };
                let chroma_score = (cam.chroma() - TARGET_CHROMA) * chroma_weight;

                Candidate {
                    argb,
                    cam,
                    excited_proportion,
                    score: proportion_score + chroma_score,
                }
            })
            .filter(|c| {
                c.cam.chroma() >= CUTOFF_CHROMA
                    && lstar_from_argb(c.argb) >= CUTOFF_TONE
                    && c.excited_proportion >= CUTOFF_EXCITED_PROPORTION
            })
            .collect();

        // Stable, so equal scores keep input order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut chosen: Vec<&Candidate> = Vec::new();
        for candidate in &candidates {
            let duplicate = chosen
                .iter()
                .any(|c| difference_degrees(candidate.cam.hue(), c.cam.hue()) < MIN_HUE_DIFFERENCE);
            if !duplicate {
                chosen.push(candidate);
            }
        }

        tracing::debug!(
            colors = colors_to_population.len(),
            qualified = candidates.len(),
            chosen = chosen.len(),
            "scored seed candidates"
        );

        if chosen.is_empty() {
            return vec![DEFAULT_SEED];
        }
        chosen.into_iter().map(|c| c.argb).collect()
    }
}
