//! CAM16 color appearance model
//!
//! Converts between sRGB and the CAM16 appearance correlates (hue, chroma,
//! lightness J, brightness Q, colorfulness M, saturation s) together with
//! their CAM16-UCS coordinates, in which Euclidean distance approximates
//! perceived color difference.

use crate::color::math::{matrix_multiply, signum};
use crate::color::{argb_from_xyz, xyz_from_argb, Argb};

use super::ViewingConditions;

/// CIE XYZ to the CAM16 cone-like RGB space.
pub const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// CAM16 RGB back to CIE XYZ.
pub const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

/// A color expressed in CAM16 appearance correlates.
///
/// Hue is in degrees, `[0, 360)`. The `*star` fields are the CAM16-UCS
/// coordinates used by [`distance`](Self::distance).
///
/// # Example
///
/// ```
/// use hct_core::{Argb, Cam16};
///
/// let red = Cam16::from_argb(Argb(0xFFFF0000));
/// assert!((red.hue() - 27.408).abs() < 0.001);
/// assert!((red.j() - 46.445).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam16 {
    /// Appearance of an sRGB color under the standard viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, ViewingConditions::standard())
    }

    pub fn from_argb_in(argb: Argb, vc: &ViewingConditions) -> Self {
        let [x, y, z] = xyz_from_argb(argb);
        Self::from_xyz_in(x, y, z, vc)
    }

    /// Appearance of a CIE XYZ color (Y = 100 for white).
    pub fn from_xyz_in(x: f64, y: f64, z: f64, vc: &ViewingConditions) -> Self {
        let rgb_t = matrix_multiply([x, y, z], &XYZ_TO_CAM16RGB);
        let rgb_d = vc.rgb_d();

        // Chromatic adaptation, then post-adaptation compression
        let [r_a, g_a, b_a] = [0, 1, 2].map(|i| {
            let d = rgb_d[i] * rgb_t[i];
            let af = (vc.fl() * d.abs() / 100.0).powf(0.42);
            signum(d) * 400.0 * af / (af + 27.13)
        });

        // Redness-greenness and yellowness-blueness
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb();
        let j = 100.0 * (ac / vc.aw()).powf(vc.c() * vc.z());
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc() * vc.ncb();
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n())).powf(0.73) * t.powf(0.9);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root();
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Build from lightness J, chroma C and hue h under the standard
    /// viewing conditions.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in(j, chroma, hue, ViewingConditions::standard())
    }

    pub fn from_jch_in(j: f64, chroma: f64, hue: f64, vc: &ViewingConditions) -> Self {
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();
        let m = chroma * vc.fl_root();
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();

        let hue_radians = hue.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Build from CAM16-UCS coordinates under the standard viewing
    /// conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in(jstar, astar, bstar, ViewingConditions::standard())
    }

    pub fn from_ucs_in(jstar: f64, astar: f64, bstar: f64, vc: &ViewingConditions) -> Self {
        let m = astar.hypot(bstar);
        let m2 = (m * 0.0228).exp_m1() / 0.0228;
        let chroma = m2 / vc.fl_root();
        let mut hue = bstar.atan2(astar) * (180.0 / std::f64::consts::PI);
        if hue < 0.0 {
            hue += 360.0;
        }
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in(j, chroma, hue, vc)
    }

    /// sRGB color under the standard viewing conditions.
    ///
    /// Channels that fall outside the sRGB gamut are clamped.
    pub fn to_argb(&self) -> Argb {
        self.viewed(ViewingConditions::standard())
    }

    /// sRGB color when seen under `vc`.
    pub fn viewed(&self, vc: &ViewingConditions) -> Argb {
        let [x, y, z] = self.xyz_in_viewing_conditions(vc);
        argb_from_xyz(x, y, z)
    }

    /// CIE XYZ of this appearance when seen under `vc`.
    pub fn xyz_in_viewing_conditions(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29f64.powf(vc.n())).powf(0.73)).powf(1.0 / 0.9);
        let hue_radians = self.hue.to_radians();

        let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
        let ac = vc.aw() * (self.j / 100.0).powf(1.0 / vc.c() / vc.z());
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc() * vc.ncb();
        let p2 = ac / vc.nbb();

        let h_sin = hue_radians.sin();
        let h_cos = hue_radians.cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let rgb_a = [r_a, g_a, b_a];
        let rgb_d = vc.rgb_d();
        let rgb_f = [0, 1, 2].map(|i| {
            let adapted = rgb_a[i];
            let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
            signum(adapted) * (100.0 / vc.fl()) * base.powf(1.0 / 0.42) / rgb_d[i]
        });

        matrix_multiply(rgb_f, &CAM16RGB_TO_XYZ)
    }

    /// Perceptual color difference in CAM16-UCS.
    ///
    /// The Euclidean UCS distance is rescaled as `1.41 * dE'^0.63`.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// Hue angle in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Lightness J.
    #[inline]
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Brightness Q.
    #[inline]
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Colorfulness M.
    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Saturation s.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    #[inline]
    pub fn jstar(&self) -> f64 {
        self.jstar
    }

    #[inline]
    pub fn astar(&self) -> f64 {
        self.astar
    }

    #[inline]
    pub fn bstar(&self) -> f64 {
        self.bstar
    }
}

impl From<Argb> for Cam16 {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}
