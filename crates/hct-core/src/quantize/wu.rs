//! Wu's box-cutting color quantizer
//!
//! Pixels are binned into a 32x32x32 cube (5 bits per channel) with one
//! extra zero plane per axis. Moments are integrated into cumulative sums so
//! the population, channel sums and squared magnitude of any axis-aligned
//! box are O(1) queries. Boxes are then split greedily, always cutting the
//! box with the largest variance at the position that maximizes the
//! between-halves variance.

use super::{Quantizer, QuantizerMap, QuantizerResult};
use crate::color::Argb;

const INDEX_BITS: u32 = 5;
/// Bins per axis, including the leading zero plane.
const INDEX_COUNT: usize = 33;
const TOTAL_SIZE: usize = INDEX_COUNT * INDEX_COUNT * INDEX_COUNT;

/// Variance-minimizing box-cut quantizer.
///
/// Every resulting color has population zero: Wu is used to seed
/// [`QuantizerWsmeans`](super::QuantizerWsmeans), which assigns real counts.
/// Colors are emitted in the order their boxes were created.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizerWu;

impl Quantizer for QuantizerWu {
    fn quantize(&self, pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        if max_colors == 0 {
            return QuantizerResult::new();
        }
        let histogram = QuantizerMap::histogram(pixels);

        let mut moments = Moments::from_histogram(&histogram);
        moments.integrate();
        let cubes = moments.create_boxes(max_colors);

        let result: QuantizerResult = moments
            .create_result(&cubes)
            .into_iter()
            .map(|color| (color, 0))
            .collect();
        tracing::debug!(
            max_colors,
            boxes = cubes.len(),
            colors = result.len(),
            "wu quantization done"
        );
        result
    }
}

#[inline]
fn index(r: usize, g: usize, b: usize) -> usize {
    (r << (INDEX_BITS * 2)) + (r << (INDEX_BITS + 1)) + r + (g << INDEX_BITS) + g + b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Red,
    Green,
    Blue,
}

/// Half-open box `(r0, r1] x (g0, g1] x (b0, b1]` in bin coordinates.
#[derive(Debug, Clone, Copy, Default)]
struct Cube {
    r0: usize,
    r1: usize,
    g0: usize,
    g1: usize,
    b0: usize,
    b1: usize,
    vol: usize,
}

impl Cube {
    fn update_volume(&mut self) {
        self.vol = (self.r1 - self.r0) * (self.g1 - self.g0) * (self.b1 - self.b0);
    }
}

/// Cumulative histogram moments.
struct Moments {
    weights: Vec<i64>,
    moments_r: Vec<i64>,
    moments_g: Vec<i64>,
    moments_b: Vec<i64>,
    moments: Vec<f64>,
}

/// Result of scanning one axis for the best cut.
struct MaximizeResult {
    cut_location: Option<usize>,
    maximum: f64,
}

impl Moments {
    fn from_histogram(histogram: &QuantizerResult) -> Self {
        let mut m = Self {
            weights: vec![0; TOTAL_SIZE],
            moments_r: vec![0; TOTAL_SIZE],
            moments_g: vec![0; TOTAL_SIZE],
            moments_b: vec![0; TOTAL_SIZE],
            moments: vec![0.0; TOTAL_SIZE],
        };

        let bits_to_remove = 8 - INDEX_BITS;
        for (pixel, count) in histogram.iter() {
            let (red, green, blue) = (pixel.red() as usize, pixel.green() as usize, pixel.blue() as usize);
            let i = index(
                (red >> bits_to_remove) + 1,
                (green >> bits_to_remove) + 1,
                (blue >> bits_to_remove) + 1,
            );
            let count = i64::from(count);
            m.weights[i] += count;
            m.moments_r[i] += red as i64 * count;
            m.moments_g[i] += green as i64 * count;
            m.moments_b[i] += blue as i64 * count;
            m.moments[i] += count as f64 * (red * red + green * green + blue * blue) as f64;
        }
        m
    }

    /// Turn per-bin moments into cumulative sums over `[1, r] x [1, g] x [1, b]`.
    fn integrate(&mut self) {
        for r in 1..INDEX_COUNT {
            let mut area = [0i64; INDEX_COUNT];
            let mut area_r = [0i64; INDEX_COUNT];
            let mut area_g = [0i64; INDEX_COUNT];
            let mut area_b = [0i64; INDEX_COUNT];
            let mut area2 = [0f64; INDEX_COUNT];

            for g in 1..INDEX_COUNT {
                let mut line = 0i64;
                let mut line_r = 0i64;
                let mut line_g = 0i64;
                let mut line_b = 0i64;
                let mut line2 = 0f64;

                for b in 1..INDEX_COUNT {
                    let i = index(r, g, b);
                    line += self.weights[i];
                    line_r += self.moments_r[i];
                    line_g += self.moments_g[i];
                    line_b += self.moments_b[i];
                    line2 += self.moments[i];

                    area[b] += line;
                    area_r[b] += line_r;
                    area_g[b] += line_g;
                    area_b[b] += line_b;
                    area2[b] += line2;

                    let previous = index(r - 1, g, b);
                    self.weights[i] = self.weights[previous] + area[b];
                    self.moments_r[i] = self.moments_r[previous] + area_r[b];
                    self.moments_g[i] = self.moments_g[previous] + area_g[b];
                    self.moments_b[i] = self.moments_b[previous] + area_b[b];
                    self.moments[i] = self.moments[previous] + area2[b];
                }
            }
        }
    }

    /// Split the color cube into at most `max_colors` boxes.
    fn create_boxes(&self, max_colors: usize) -> Vec<Cube> {
        let mut cubes = vec![Cube::default(); max_colors];
        let mut volume_variance = vec![0.0f64; max_colors];
        cubes[0].r1 = INDEX_COUNT - 1;
        cubes[0].g1 = INDEX_COUNT - 1;
        cubes[0].b1 = INDEX_COUNT - 1;

        let mut generated = max_colors;
        let mut next = 0;
        let mut i = 1;
        while i < max_colors {
            let (one, two) = split_pair(&mut cubes, next, i);
            if self.cut(one, two) {
                volume_variance[next] = if cubes[next].vol > 1 { self.variance(&cubes[next]) } else { 0.0 };
                volume_variance[i] = if cubes[i].vol > 1 { self.variance(&cubes[i]) } else { 0.0 };
            } else {
                // Uncuttable: retire it and retry this slot with the next box
                volume_variance[next] = 0.0;
                i -= 1;
            }

            next = 0;
            let mut temp = volume_variance[0];
            for (j, &variance) in volume_variance.iter().enumerate().take(i + 1).skip(1) {
                if variance > temp {
                    temp = variance;
                    next = j;
                }
            }
            if temp <= 0.0 {
                generated = i + 1;
                break;
            }
            i += 1;
        }

        cubes.truncate(generated);
        cubes
    }

    /// Mean color of every non-empty box, in box order.
    fn create_result(&self, cubes: &[Cube]) -> Vec<Argb> {
        cubes
            .iter()
            .filter_map(|cube| {
                let weight = volume(cube, &self.weights);
                if weight <= 0 {
                    return None;
                }
                let r = (volume(cube, &self.moments_r) / weight) as u8;
                let g = (volume(cube, &self.moments_g) / weight) as u8;
                let b = (volume(cube, &self.moments_b) / weight) as u8;
                Some(Argb::from_rgb(r, g, b))
            })
            .collect()
    }

    fn variance(&self, cube: &Cube) -> f64 {
        let dr = volume(cube, &self.moments_r) as f64;
        let dg = volume(cube, &self.moments_g) as f64;
        let db = volume(cube, &self.moments_b) as f64;
        let xx = volume_f64(cube, &self.moments);
        let hypotenuse = dr * dr + dg * dg + db * db;
        let weight = volume(cube, &self.weights) as f64;
        xx - hypotenuse / weight
    }

    /// Cut `one` in two along its best axis, writing the upper half to `two`.
    fn cut(&self, one: &mut Cube, two: &mut Cube) -> bool {
        let whole_r = volume(one, &self.moments_r);
        let whole_g = volume(one, &self.moments_g);
        let whole_b = volume(one, &self.moments_b);
        let whole_w = volume(one, &self.weights);
        let whole = [whole_r, whole_g, whole_b, whole_w];

        let max_r = self.maximize(one, Direction::Red, one.r0 + 1, one.r1, whole);
        let max_g = self.maximize(one, Direction::Green, one.g0 + 1, one.g1, whole);
        let max_b = self.maximize(one, Direction::Blue, one.b0 + 1, one.b1, whole);

        let direction = if max_r.maximum >= max_g.maximum && max_r.maximum >= max_b.maximum {
            if max_r.cut_location.is_none() {
                return false;
            }
            Direction::Red
        } else if max_g.maximum >= max_b.maximum {
            Direction::Green
        } else {
            Direction::Blue
        };

        two.r1 = one.r1;
        two.g1 = one.g1;
        two.b1 = one.b1;

        // A non-zero maximum always comes with a cut location
        match direction {
            Direction::Red => {
                one.r1 = max_r.cut_location.unwrap_or(one.r1);
                two.r0 = one.r1;
                two.g0 = one.g0;
                two.b0 = one.b0;
            }
            Direction::Green => {
                one.g1 = max_g.cut_location.unwrap_or(one.g1);
                two.r0 = one.r0;
                two.g0 = one.g1;
                two.b0 = one.b0;
            }
            Direction::Blue => {
                one.b1 = max_b.cut_location.unwrap_or(one.b1);
                two.r0 = one.r0;
                two.g0 = one.g0;
                two.b0 = one.b1;
            }
        }

        one.update_volume();
        two.update_volume();
        true
    }

    /// Best cut position along `direction` in `first..last`.
    fn maximize(
        &self,
        cube: &Cube,
        direction: Direction,
        first: usize,
        last: usize,
        [whole_r, whole_g, whole_b, whole_w]: [i64; 4],
    ) -> MaximizeResult {
        let bottom_r = bottom(cube, direction, &self.moments_r);
        let bottom_g = bottom(cube, direction, &self.moments_g);
        let bottom_b = bottom(cube, direction, &self.moments_b);
        let bottom_w = bottom(cube, direction, &self.weights);

        let mut maximum = 0.0;
        let mut cut_location = None;

        for i in first..last {
            let half_r = bottom_r + top(cube, direction, i, &self.moments_r);
            let half_g = bottom_g + top(cube, direction, i, &self.moments_g);
            let half_b = bottom_b + top(cube, direction, i, &self.moments_b);
            let half_w = bottom_w + top(cube, direction, i, &self.weights);
            if half_w == 0 {
                continue;
            }
            let mut temp = sum_of_squares(half_r, half_g, half_b) / half_w as f64;

            let half_r = whole_r - half_r;
            let half_g = whole_g - half_g;
            let half_b = whole_b - half_b;
            let half_w = whole_w - half_w;
            if half_w == 0 {
                continue;
            }
            temp += sum_of_squares(half_r, half_g, half_b) / half_w as f64;

            if temp > maximum {
                maximum = temp;
                cut_location = Some(i);
            }
        }

        MaximizeResult {
            cut_location,
            maximum,
        }
    }
}

/// Mutable borrows of two distinct cubes.
fn split_pair(cubes: &mut [Cube], a: usize, b: usize) -> (&mut Cube, &mut Cube) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = cubes.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = cubes.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[inline]
fn sum_of_squares(r: i64, g: i64, b: i64) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    r * r + g * g + b * b
}

fn volume(cube: &Cube, moment: &[i64]) -> i64 {
    moment[index(cube.r1, cube.g1, cube.b1)] - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

fn volume_f64(cube: &Cube, moment: &[f64]) -> f64 {
    moment[index(cube.r1, cube.g1, cube.b1)] - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

/// Part of the box volume below the lower face along `direction`.
fn bottom(cube: &Cube, direction: Direction, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            -moment[index(cube.r0, cube.g1, cube.b1)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Green => {
            -moment[index(cube.r1, cube.g0, cube.b1)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Blue => {
            -moment[index(cube.r1, cube.g1, cube.b0)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
    }
}

/// Part of the box volume up to `position` along `direction`.
fn top(cube: &Cube, direction: Direction, position: usize, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            moment[index(position, cube.g1, cube.b1)] - moment[index(position, cube.g1, cube.b0)]
                - moment[index(position, cube.g0, cube.b1)]
                + moment[index(position, cube.g0, cube.b0)]
        }
        Direction::Green => {
            moment[index(cube.r1, position, cube.b1)] - moment[index(cube.r1, position, cube.b0)]
                - moment[index(cube.r0, position, cube.b1)]
                + moment[index(cube.r0, position, cube.b0)]
        }
        Direction::Blue => {
            moment[index(cube.r1, cube.g1, position)] - moment[index(cube.r1, cube.g0, position)]
                - moment[index(cube.r0, cube.g1, position)]
                + moment[index(cube.r0, cube.g0, position)]
        }
    }
}
