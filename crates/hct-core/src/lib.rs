// Generated LUT tables and published color science constants
#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception,
    clippy::manual_range_contains
)]

//! hct-core: color appearance math and seed extraction for dynamic theming
//!
//! This library turns images into theme seed colors and seed colors into
//! tonal palettes, using the CAM16 color appearance model and the HCT
//! (hue, chroma, tone) color space built on it.
//!
//! # Quick Start
//!
//! Extract a seed from pixels, then build the palettes for a theme:
//!
//! ```
//! use hct_core::{Argb, CorePalette, PaletteRole, Quantizer, QuantizerCelebi, Scorer};
//!
//! let pixels = vec![Argb(0xFF4285F4); 64];
//! let colors = QuantizerCelebi.quantize(&pixels, 128);
//! let seed = Scorer::score(&colors)[0];
//!
//! let palette = CorePalette::of(seed);
//! let primary_40 = palette.tone(PaletteRole::Primary, 40);
//! assert!(primary_40.is_opaque());
//! ```
//!
//! # HCT
//!
//! [`Hct`] combines CAM16 hue and chroma with CIE L* ("tone"). Tone alone
//! decides contrast, so two colors whose tones differ by 40 or more are
//! legible on each other regardless of hue.
//!
//! ```
//! use hct_core::{Argb, Hct};
//!
//! let blue = Hct::from_argb(Argb(0xFF4285F4));
//! assert!((blue.hue() - 265.98).abs() < 0.01);
//!
//! // Requests outside the sRGB gamut keep hue and tone and lose chroma
//! let vivid = Hct::new(120.0, 200.0, 50.0);
//! assert!(vivid.chroma() < 200.0);
//! ```
//!
//! # Color Spaces
//!
//! - [`Argb`]: packed 32-bit sRGB, the interchange type for everything
//! - [`Lab`]: CIE L*a*b* (D65), used for clustering distances
//! - [`Cam16`]: appearance correlates under [`ViewingConditions`]
//! - [`Hct`]: hue and chroma from CAM16, tone from L*
//!
//! # Quantizers
//!
//! All quantizers implement [`Quantizer`] and return a [`QuantizerResult`]
//! mapping colors to pixel counts:
//!
//! - [`QuantizerMap`]: exact histogram of opaque pixels
//! - [`QuantizerWu`]: Wu's variance-minimizing box cuts
//! - [`QuantizerWsmeans`]: weighted k-means in Lab
//! - [`QuantizerCelebi`]: Wu seeds refined by Wsmeans (the default)
//!
//! Translucent pixels (alpha below 255) are ignored everywhere.
//!
//! # Scoring
//!
//! [`Scorer::score`] ranks quantized colors by how much of the image their
//! hue family covers and how colorful they are, dropping near-duplicate
//! hues. When nothing qualifies it returns [`DEFAULT_SEED`].

pub mod cam;
pub mod color;
pub mod hct;
pub mod palette;
pub mod quantize;
pub mod score;


pub use cam::{Cam16, ViewingConditions};
pub use color::{Argb, Lab, ParseColorError};
pub use hct::Hct;
pub use palette::{CorePalette, PaletteRole, ParseRoleError, TonalPalette};
pub use quantize::{
    PointProvider, PointProviderLab, Quantizer, QuantizerCelebi, QuantizerMap, QuantizerResult,
    QuantizerWsmeans, QuantizerWu,
};
pub use score::{Scorer, DEFAULT_SEED};
