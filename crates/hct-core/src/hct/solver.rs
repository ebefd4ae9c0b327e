//! Gamut mapping from a requested hue, chroma and tone to an sRGB color
//!
//! Many hue/chroma/tone combinations have no sRGB representation. The
//! solver keeps hue and tone fixed and searches for the highest chroma that
//! is still displayable:
//!
//! 1. For a candidate chroma, bisect CAM16 lightness J until the clipped
//!    sRGB color has the requested L* (within [`DL_MAX`]) and is
//!    perceptually close to the ideal color at that hue (within [`DE_MAX`]).
//! 2. If the requested chroma itself succeeds, use it. Otherwise bisect
//!    chroma between zero and the request, keeping the best success.
//! 3. With no success at all, fall back to the gray of the requested tone.

use crate::cam::{Cam16, ViewingConditions};
use crate::color::math::clamp_double;
use crate::color::{argb_from_lstar, lstar_from_argb, Argb};

/// Chroma bisection stops when the interval is narrower than this.
const CHROMA_SEARCH_ENDPOINT: f64 = 0.4;
/// Largest accepted CAM16-UCS distance from the ideal color.
const DE_MAX: f64 = 1.0;
/// Largest accepted L* difference from the requested tone.
const DL_MAX: f64 = 0.2;
/// Lightness bisection stops when the interval is narrower than this.
const LIGHTNESS_SEARCH_ENDPOINT: f64 = 0.01;

/// Find the sRGB color closest to `(hue, chroma, tone)` under `vc`.
///
/// Tone is matched to within [`DL_MAX`] and never traded for chroma.
pub fn solve_to_argb(hue: f64, chroma: f64, tone: f64, vc: &ViewingConditions) -> Argb {
    if chroma < 1.0 || tone.round() <= 0.0 || tone.round() >= 100.0 {
        return argb_from_lstar(tone);
    }
    let hue = clamp_double(0.0, 360.0, hue);

    // Binary search between zero chroma and the request. The request itself
    // is tried first since it is usually in gamut.
    let mut high = chroma;
    let mut mid = chroma;
    let mut low = 0.0;
    let mut is_first_loop = true;
    let mut answer: Option<Cam16> = None;

    while (low - high).abs() >= CHROMA_SEARCH_ENDPOINT {
        let possible_answer = find_cam_by_j(hue, mid, tone, vc);

        if is_first_loop {
            if let Some(cam) = possible_answer {
                return cam.viewed(vc);
            }
            is_first_loop = false;
            mid = low + (high - low) / 2.0;
            continue;
        }

        match possible_answer {
            None => high = mid,
            Some(cam) => {
                answer = Some(cam);
                low = mid;
            }
        }
        mid = low + (high - low) / 2.0;
    }

    match answer {
        Some(cam) => cam.viewed(vc),
        None => {
            tracing::trace!(hue, chroma, tone, "no in-gamut chroma found, using gray");
            argb_from_lstar(tone)
        }
    }
}

/// Bisect J for a color at `hue` and `chroma` whose clipped sRGB rendering
/// has L* close to `tone`.
///
/// Returns the CAM16 of the best clipped color, or `None` when every clipped
/// candidate drifted too far from the ideal color.
fn find_cam_by_j(hue: f64, chroma: f64, tone: f64, vc: &ViewingConditions) -> Option<Cam16> {
    let mut low: f64 = 0.0;
    let mut high: f64 = 100.0;
    let mut best_dl = 1000.0;
    let mut best_de = 1000.0;
    let mut best: Option<Cam16> = None;

    while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;
        let clipped = Cam16::from_jch_in(mid, chroma, hue, vc).viewed(vc);
        let clipped_lstar = lstar_from_argb(clipped);
        let dl = (tone - clipped_lstar).abs();

        if dl < DL_MAX {
            let clipped_cam = Cam16::from_argb_in(clipped, vc);
            let ideal = Cam16::from_jch_in(clipped_cam.j(), clipped_cam.chroma(), hue, vc);
            let de = clipped_cam.distance(&ideal);
            if de <= DE_MAX && de <= best_de {
                best_dl = dl;
                best_de = de;
                best = Some(clipped_cam);
            }
        }

        if best_dl == 0.0 && best_de < 1e-9 {
            break;
        }

        if clipped_lstar < tone {
            low = mid;
        } else {
            high = mid;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(hue: f64, chroma: f64, tone: f64) -> Argb {
        solve_to_argb(hue, chroma, tone, ViewingConditions::standard())
    }

    #[test]
    fn test_low_chroma_is_gray() {
        assert_eq!(solve(120.0, 0.5, 50.0), Argb(0xFF77_7777));
        assert_eq!(solve(120.0, 0.0, 50.0), argb_from_lstar(50.0));
        assert_eq!(solve(120.0, -5.0, 50.0), argb_from_lstar(50.0));
    }

    #[test]
    fn test_extreme_tones() {
        assert_eq!(solve(120.0, 60.0, 100.0), Argb::WHITE);
        assert_eq!(solve(120.0, 60.0, 0.0), Argb::BLACK);
        assert_eq!(solve(120.0, 60.0, 99.6), argb_from_lstar(99.6));
    }

    #[test]
    fn test_out_of_gamut_chroma_keeps_tone() {
        let argb = solve(120.0, 200.0, 50.0);
        let cam = Cam16::from_argb(argb);
        assert!((lstar_from_argb(argb) - 50.0).abs() < 0.5);
        assert!(cam.chroma() < 200.0);
        assert!((cam.chroma() - 53.29).abs() < 1.0, "chroma {}", cam.chroma());
        assert!((cam.hue() - 121.04).abs() < 1.0, "hue {}", cam.hue());
    }

    #[test]
    fn test_find_cam_by_j_matches_tone() {
        let vc = ViewingConditions::standard();
        let cam = find_cam_by_j(270.0, 36.0, 50.0, vc).expect("in gamut");
        let argb = cam.viewed(vc);
        assert!((lstar_from_argb(argb) - 50.0).abs() < DL_MAX);
    }

    #[test]
    fn test_find_cam_by_j_rejects_impossible_chroma() {
        assert!(find_cam_by_j(120.0, 200.0, 50.0, ViewingConditions::standard()).is_none());
    }
}
