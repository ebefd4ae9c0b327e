//! Conversions between ARGB, linear RGB, CIE XYZ, CIE L*a*b* and L*
//!
//! All linear quantities use a 0..=100 scale, matching the white point
//! [`WHITE_POINT_D65`]. Functions producing an [`Argb`] always return an
//! opaque color with each channel rounded and clamped into 0..=255.

use super::lut;
use super::math::matrix_multiply;
use super::Argb;

/// Linear sRGB to CIE XYZ (D65).
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// CIE XYZ (D65) to linear sRGB.
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// Standard D65 white point on the 0..=100 scale.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE epsilon, 216/24389.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE kappa, 24389/27.
const KAPPA: f64 = 24389.0 / 27.0;

/// Linear light (0.0..=100.0) of an 8-bit sRGB channel.
#[inline]
pub fn linearized(component: u8) -> f64 {
    lut::linearized(component)
}

/// Gamma-encode linear light (0.0..=100.0) into an 8-bit sRGB channel.
///
/// Out-of-range input is clamped to 0 or 255.
pub fn delinearized(component: f64) -> u8 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    // NaN casts to 0
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Pack linear RGB components (0.0..=100.0) into an opaque color.
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// Linear RGB components of a color, 0.0..=100.0.
pub fn linrgb_from_argb(argb: Argb) -> [f64; 3] {
    [
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    ]
}

pub fn argb_from_xyz(x: f64, y: f64, z: f64) -> Argb {
    argb_from_linrgb(matrix_multiply([x, y, z], &XYZ_TO_SRGB))
}

pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    matrix_multiply(linrgb_from_argb(argb), &SRGB_TO_XYZ)
}

/// CIE L*a*b* of a color as `[l, a, b]`.
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub fn argb_from_lab(l: f64, a: f64, b: f64) -> Argb {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    argb_from_xyz(
        lab_invf(fx) * WHITE_POINT_D65[0],
        lab_invf(fy) * WHITE_POINT_D65[1],
        lab_invf(fz) * WHITE_POINT_D65[2],
    )
}

/// The gray with the given L*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let fy = (lstar + 16.0) / 116.0;
    let cube = fy * fy * fy;
    let y = if lstar > 8.0 { cube } else { lstar / KAPPA };
    let xz = if cube > EPSILON { cube } else { lstar / KAPPA };
    argb_from_xyz(
        xz * WHITE_POINT_D65[0],
        y * WHITE_POINT_D65[1],
        xz * WHITE_POINT_D65[2],
    )
}

/// CIE L* of a color, 0.0..=100.0.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = xyz_from_argb(argb)[1] / 100.0;
    if y <= EPSILON {
        KAPPA * y
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    }
}

/// Relative luminance Y (0.0..=100.0) for an L*.
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* for a relative luminance Y (0.0..=100.0).
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}
