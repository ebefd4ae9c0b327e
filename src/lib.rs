//! Tonal Theme - dynamic color themes from images
//!
//! Picks a seed color from image pixels, derives tonal palettes from it and
//! resolves Material-style light and dark schemes. The color science lives
//! in the `hct-core` crate; this library adds configuration, role tables
//! and the extraction pipeline.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, ThemeError};
pub use models::{PaletteStyle, RoleMap, RoleOverride, RoleSpec, ThemeConfig};
pub use services::{Scheme, Theme, ThemeExtractor};
