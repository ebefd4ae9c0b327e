//! CAM16 viewing conditions
//!
//! A [`ViewingConditions`] value holds every intermediate the CAM16 model
//! derives from the environment a color is seen in. Computing them involves
//! several transcendental functions, so they are built once and passed by
//! reference into every [`Cam16`](super::Cam16) conversion.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::color::math::{clamp_double, lerp, matrix_multiply};
use crate::color::{y_from_lstar, WHITE_POINT_D65};

use super::cam16::XYZ_TO_CAM16RGB;

/// Precomputed CAM16 parameters for one viewing environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: [f64; 3],
    fl: f64,
    fl_root: f64,
    z: f64,
}

static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();

impl ViewingConditions {
    /// Derive viewing conditions from the environment.
    ///
    /// # Arguments
    ///
    /// * `white_point` - XYZ of the adopted white, Y = 100
    /// * `adapting_luminance` - luminance of the adapting field in cd/m²
    /// * `background_lstar` - L* of the background
    /// * `surround` - 0.0 (dark) to 2.0 (average), selects F, c and Nc
    /// * `discounting_illuminant` - observer fully adapted to the illuminant
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let rgb_w = matrix_multiply(white_point, &XYZ_TO_CAM16RGB);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = clamp_double(0.0, 1.0, d);
        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = [0, 1, 2].map(|i| {
            let f = (fl * rgb_d[i] * rgb_w[i] / 100.0).powf(0.42);
            400.0 * f / (f + 27.13)
        });
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB viewing conditions: D65 white, a 200 lux environment, mid-gray
    /// background, average surround, no discounting.
    ///
    /// Computed on first use and shared for the rest of the process.
    pub fn standard() -> &'static ViewingConditions {
        STANDARD.get_or_init(|| {
            Self::new(
                WHITE_POINT_D65,
                200.0 / PI * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        })
    }

    /// Background relative luminance over white luminance.
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Achromatic response of the white point.
    #[inline]
    pub fn aw(&self) -> f64 {
        self.aw
    }

    #[inline]
    pub fn nbb(&self) -> f64 {
        self.nbb
    }

    #[inline]
    pub fn ncb(&self) -> f64 {
        self.ncb
    }

    /// Exponential nonlinearity from the surround.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Chromatic induction factor.
    #[inline]
    pub fn nc(&self) -> f64 {
        self.nc
    }

    /// Per-channel discounting factors for chromatic adaptation.
    #[inline]
    pub fn rgb_d(&self) -> [f64; 3] {
        self.rgb_d
    }

    /// Luminance-level adaptation factor.
    #[inline]
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// Fourth root of [`fl`](Self::fl).
    #[inline]
    pub fn fl_root(&self) -> f64 {
        self.fl_root
    }

    /// Base exponential nonlinearity.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::standard().clone()
    }
}
