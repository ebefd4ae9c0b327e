//! HCT color space
//!
//! HCT combines CAM16 hue and chroma with CIE L* ("tone"). Tone differences
//! map directly to contrast, which makes HCT the working space for building
//! tonal palettes.

#[allow(clippy::module_inception)]
mod hct;
mod solver;

pub use hct::Hct;
pub use solver::solve_to_argb;
