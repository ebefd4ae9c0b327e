//! Weighted k-means quantizer
//!
//! Each distinct opaque color is one weighted point. Clusters start from the
//! supplied seed colors (normally Wu's output) and are refined for a bounded
//! number of iterations. Reassignment uses the triangle inequality: with
//! squared distances, a cluster at least `4 * d(point, current)` away from
//! the current cluster cannot be closer to the point, so the sorted
//! cluster-to-cluster distances let most candidates be skipped.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::{PointProvider, PointProviderLab, Quantizer, QuantizerMap, QuantizerResult};
use crate::color::Argb;

const MAX_ITERATIONS: usize = 10;
/// Points move only when the new cluster is this much closer (unsquared).
const MIN_MOVEMENT_DISTANCE: f64 = 3.0;
const RANDOM_SEED: u64 = 0x42688;

/// Weighted k-means ("Wsmeans") quantizer.
///
/// Result colors appear in cluster order; when two clusters round to the
/// same sRGB color the first one wins.
///
/// # Example
///
/// ```
/// use hct_core::{Argb, Quantizer, QuantizerWsmeans};
///
/// let pixels = [Argb(0xFFFF0000), Argb(0xFFFE0000), Argb(0xFF0000FF)];
/// let quantizer = QuantizerWsmeans::new()
///     .starting_clusters(vec![Argb(0xFFFF0000), Argb(0xFF0000FF)]);
/// let result = quantizer.quantize(&pixels, 2);
/// assert_eq!(result.total_population(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct QuantizerWsmeans<P = PointProviderLab> {
    starting_clusters: Vec<Argb>,
    point_provider: P,
}

impl QuantizerWsmeans<PointProviderLab> {
    /// Lab clustering with no seed colors.
    pub fn new() -> Self {
        Self {
            starting_clusters: Vec::new(),
            point_provider: PointProviderLab,
        }
    }
}

impl Default for QuantizerWsmeans<PointProviderLab> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointProvider> QuantizerWsmeans<P> {
    /// Seed colors for the initial clusters.
    ///
    /// Without seeds, clusters start at randomly chosen input colors drawn
    /// from a fixed-seed generator, so results stay reproducible.
    pub fn starting_clusters(mut self, clusters: impl Into<Vec<Argb>>) -> Self {
        self.starting_clusters = clusters.into();
        self
    }

    /// Cluster in a different color space.
    pub fn point_provider<Q: PointProvider>(self, point_provider: Q) -> QuantizerWsmeans<Q> {
        QuantizerWsmeans {
            starting_clusters: self.starting_clusters,
            point_provider,
        }
    }

    /// Cluster `pixels` into at most `max_colors` colors, seeded with
    /// `starting_clusters`.
    pub fn quantize_with_clusters(
        &self,
        pixels: &[Argb],
        starting_clusters: &[Argb],
        max_colors: usize,
    ) -> QuantizerResult {
        let provider = &self.point_provider;

        let histogram = QuantizerMap::histogram(pixels);
        let points: Vec<[f64; 3]> = histogram.colors().map(|c| provider.from_argb(c)).collect();
        let counts: Vec<u32> = histogram.iter().map(|(_, count)| count).collect();
        let point_count = points.len();

        let mut cluster_count = max_colors.min(point_count);
        if !starting_clusters.is_empty() {
            cluster_count = cluster_count.min(starting_clusters.len());
        }
        if cluster_count == 0 {
            return QuantizerResult::new();
        }

        let mut clusters: Vec<[f64; 3]> = starting_clusters
            .iter()
            .take(cluster_count)
            .map(|&c| provider.from_argb(c))
            .collect();
        let additional_needed = cluster_count - clusters.len();
        if additional_needed > 0 {
            let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
            let chosen = rand::seq::index::sample(&mut rng, point_count, additional_needed);
            clusters.extend(chosen.into_iter().map(|i| points[i]));
        }

        let mut assignments: Vec<usize> = (0..point_count).map(|i| i % cluster_count).collect();
        let mut populations = vec![0u64; cluster_count];
        let mut iterations = 0;

        for iteration in 0..MAX_ITERATIONS {
            iterations = iteration + 1;

            // Every other cluster, nearest first
            let neighbours: Vec<Vec<(f64, usize)>> = (0..cluster_count)
                .into_par_iter()
                .map(|i| {
                    let mut row: Vec<(f64, usize)> = (0..cluster_count)
                        .filter(|&j| j != i)
                        .map(|j| (provider.distance(&clusters[i], &clusters[j]), j))
                        .collect();
                    row.sort_by(|a, b| a.0.total_cmp(&b.0));
                    row
                })
                .collect();

            let reassigned: Vec<usize> = points
                .par_iter()
                .zip(assignments.par_iter())
                .map(|(point, &current)| {
                    let current_distance = provider.distance(point, &clusters[current]);
                    let mut minimum_distance = current_distance;
                    let mut best = None;
                    for &(between, candidate) in &neighbours[current] {
                        if between >= 4.0 * current_distance {
                            break;
                        }
                        let distance = provider.distance(point, &clusters[candidate]);
                        if distance < minimum_distance {
                            minimum_distance = distance;
                            best = Some(candidate);
                        }
                    }
                    match best {
                        Some(candidate)
                            if (minimum_distance.sqrt() - current_distance.sqrt()).abs()
                                > MIN_MOVEMENT_DISTANCE =>
                        {
                            candidate
                        }
                        _ => current,
                    }
                })
                .collect();

            let moved = reassigned.iter().zip(&assignments).filter(|(a, b)| a != b).count();
            assignments = reassigned;
            tracing::trace!(iteration, moved, "wsmeans pass");
            if moved == 0 && iteration != 0 {
                break;
            }

            let mut component_sums = vec![[0.0f64; 3]; cluster_count];
            populations = vec![0u64; cluster_count];
            for ((point, &count), &cluster) in points.iter().zip(&counts).zip(&assignments) {
                let weight = f64::from(count);
                populations[cluster] += u64::from(count);
                for axis in 0..3 {
                    component_sums[cluster][axis] += point[axis] * weight;
                }
            }
            for (cluster, (sums, &population)) in clusters.iter_mut().zip(component_sums.iter().zip(&populations)) {
                *cluster = if population == 0 {
                    [0.0, 0.0, 0.0]
                } else {
                    let total = population as f64;
                    [sums[0] / total, sums[1] / total, sums[2] / total]
                };
            }
        }

        let mut result = QuantizerResult::new();
        for (cluster, &population) in clusters.iter().zip(&populations) {
            if population == 0 {
                continue;
            }
            let color = provider.to_argb(*cluster);
            if result.contains(color) {
                continue;
            }
            result.insert(color, u32::try_from(population).unwrap_or(u32::MAX));
        }

        tracing::debug!(
            points = point_count,
            clusters = cluster_count,
            iterations,
            colors = result.len(),
            "wsmeans quantization done"
        );
        result
    }
}

impl<P: PointProvider> Quantizer for QuantizerWsmeans<P> {
    fn quantize(&self, pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        self.quantize_with_clusters(pixels, &self.starting_clusters, max_colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Argb = Argb(0xFFFF_0000);
    const GREEN: Argb = Argb(0xFF00_FF00);
    const BLUE: Argb = Argb(0xFF00_00FF);

    #[test]
    fn test_seeded_clusters_keep_exact_colors() {
        let pixels = [RED, GREEN, BLUE, BLUE, BLUE];
        let result = QuantizerWsmeans::new()
            .starting_clusters(vec![GREEN, BLUE, RED])
            .quantize(&pixels, 128);
        let pairs: Vec<(Argb, u32)> = result.iter().collect();
        assert_eq!(pairs, vec![(GREEN, 1), (BLUE, 3), (RED, 1)]);
    }

    #[test]
    fn test_cluster_count_limited_by_seeds() {
        let pixels = [RED, GREEN, BLUE];
        let result = QuantizerWsmeans::new()
            .starting_clusters(vec![RED])
            .quantize(&pixels, 128);
        assert_eq!(result.len(), 1);
        assert_eq!(result.total_population(), 3);
    }

    #[test]
    fn test_merges_nearby_colors() {
        let pixels = [
            Argb(0xFFFF_0000),
            Argb(0xFFFE_0101),
            Argb(0xFFFD_0000),
            Argb(0xFF00_00FF),
            Argb(0xFF01_01FE),
        ];
        let result = QuantizerWsmeans::new()
            .starting_clusters(vec![Argb(0xFFFF_0000), Argb(0xFF00_00FF)])
            .quantize(&pixels, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_population(), 5);
        let populations: Vec<u32> = result.iter().map(|(_, count)| count).collect();
        assert_eq!(populations, vec![3, 2]);
    }

    #[test]
    fn test_random_seeding_is_deterministic() {
        let pixels: Vec<Argb> = (0..=255u8)
            .step_by(3)
            .map(|v| Argb::from_rgb(v, 255 - v, v / 2))
            .collect();
        let first = QuantizerWsmeans::new().quantize(&pixels, 8);
        let second = QuantizerWsmeans::new().quantize(&pixels, 8);
        assert_eq!(first, second);
        assert!(first.len() <= 8);
        assert!(first.total_population() <= pixels.len() as u64);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(QuantizerWsmeans::new().quantize(&[], 8).is_empty());
        assert!(QuantizerWsmeans::new().quantize(&[RED], 0).is_empty());
        assert!(QuantizerWsmeans::new().quantize(&[Argb(0x7FFF_0000)], 8).is_empty());
    }
}
