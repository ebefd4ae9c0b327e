//! Tonal palettes
//!
//! A [`TonalPalette`] fixes hue and chroma and varies tone. A
//! [`CorePalette`] bundles the six tonal palettes a theme is built from,
//! addressed by [`PaletteRole`].

mod core_palette;
mod error;
mod role;
mod tonal;

pub use core_palette::CorePalette;
pub use error::ParseRoleError;
pub use role::PaletteRole;
pub use tonal::TonalPalette;
