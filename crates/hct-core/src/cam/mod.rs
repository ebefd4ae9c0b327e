//! CAM16 color appearance model
//!
//! [`Cam16`] converts sRGB colors to perceptual correlates under a given
//! [`ViewingConditions`], and back. The process-wide sRGB environment is
//! available as [`ViewingConditions::standard`]; every conversion also has an
//! `_in` variant taking explicit conditions.

mod cam16;
mod viewing_conditions;

pub use cam16::{Cam16, CAM16RGB_TO_XYZ, XYZ_TO_CAM16RGB};
pub use viewing_conditions::ViewingConditions;
