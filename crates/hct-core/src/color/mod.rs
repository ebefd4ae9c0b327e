//! Color types and conversion utilities
//!
//! This module provides the packed [`Argb`] value used throughout the crate,
//! the [`Lab`] clustering space, and the free-function conversions between
//! sRGB, linear RGB, CIE XYZ, L*a*b* and L*.
//!
//! # Scales
//!
//! - **Argb**: 8-bit gamma-encoded sRGB channels plus alpha. Use for I/O.
//! - **Linear RGB / XYZ**: 0.0..=100.0, relative to the D65 white point.
//! - **L\***: 0.0 (black) to 100.0 (white). This is the HCT "tone".
//!
//! # Example
//!
//! ```
//! use hct_core::color::{argb_from_lstar, lstar_from_argb};
//! use hct_core::Argb;
//!
//! let gray = argb_from_lstar(50.0);
//! assert_eq!(gray, Argb(0xFF777777));
//! assert!((lstar_from_argb(gray) - 50.0).abs() < 0.5);
//! ```

mod argb;
mod lab;
mod lut;
pub mod math;
mod utils;

pub use argb::{Argb, ParseColorError};
pub use lab::Lab;
pub use utils::{
    argb_from_lab, argb_from_linrgb, argb_from_lstar, argb_from_xyz, delinearized, lab_from_argb,
    linearized, linrgb_from_argb, lstar_from_argb, lstar_from_y, xyz_from_argb, y_from_lstar,
    SRGB_TO_XYZ, WHITE_POINT_D65, XYZ_TO_SRGB,
};
