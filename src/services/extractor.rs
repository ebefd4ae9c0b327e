//! ThemeExtractor builder -- the main entry point of the crate.
//!
//! [`ThemeExtractor`] runs the image pipeline (quantize, score, derive
//! palettes, resolve schemes) with fluent configuration on top of a
//! [`ThemeConfig`].

use hct_core::{Argb, CorePalette, Quantizer, QuantizerCelebi, Scorer, DEFAULT_SEED};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ThemeError;
use crate::models::{PaletteStyle, RoleMap, RoleOverride, ThemeConfig};
use crate::services::Scheme;

/// Light and dark schemes derived from one seed color
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    /// The color everything was derived from
    pub seed: Argb,
    /// Ranked seed candidates, best first; `seed` is the first entry
    pub candidates: Vec<Argb>,
    pub palette_style: PaletteStyle,
    #[serde(skip)]
    pub palette: CorePalette,
    pub light: RoleMap<Argb>,
    pub dark: RoleMap<Argb>,
}

impl Theme {
    /// Color of a scheme role
    pub fn role(&self, name: &str, dark: bool) -> Result<Argb, ThemeError> {
        let scheme = if dark { &self.dark } else { &self.light };
        scheme
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::UnknownRole(name.to_string()))
    }

    /// Pretty-printed JSON with colors as `#AARRGGBB` strings
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Image-to-theme pipeline builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self`, so one extractor serves
///   many images
/// - A fixed seed skips quantization and scoring entirely
///
/// # Example
///
/// ```
/// use hct_core::Argb;
/// use tonal_theme::{ThemeConfig, ThemeExtractor};
///
/// let extractor = ThemeExtractor::new(ThemeConfig::default()).max_colors(64);
/// let pixels = vec![Argb(0xFF4285F4); 16];
/// let theme = extractor.extract(&pixels);
///
/// assert_eq!(theme.seed, Argb(0xFF4285F4));
/// assert_eq!(theme.role("primary", false).unwrap(), Argb(0xFF005AC5));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeExtractor {
    max_colors: usize,
    palette_style: PaletteStyle,
    seed: Option<Argb>,
    custom_roles: IndexMap<String, RoleOverride>,
}

impl ThemeExtractor {
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            max_colors: config.max_colors,
            palette_style: config.palette_style,
            seed: config.seed,
            custom_roles: config.custom_roles,
        }
    }

    /// Set the quantizer color budget, clamped to `1..=256`.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors.clamp(1, 256);
        self
    }

    #[inline]
    pub fn palette_style(mut self, style: PaletteStyle) -> Self {
        self.palette_style = style;
        self
    }

    /// Use a fixed seed instead of extracting one.
    #[inline]
    pub fn seed(mut self, seed: Argb) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Extract a theme from image pixels.
    ///
    /// Translucent pixels are ignored. Images with no usable color get a
    /// theme built from [`DEFAULT_SEED`].
    pub fn extract(&self, pixels: &[Argb]) -> Theme {
        if let Some(seed) = self.seed {
            tracing::debug!(%seed, "Using configured seed, skipping extraction");
            return self.from_seed(seed);
        }

        let colors = QuantizerCelebi.quantize(pixels, self.max_colors);
        let candidates = Scorer::score(&colors);
        let seed = candidates.first().copied().unwrap_or(DEFAULT_SEED);

        tracing::info!(
            pixels = pixels.len(),
            colors = colors.len(),
            candidates = candidates.len(),
            %seed,
            "Extracted theme seed"
        );

        self.build(seed, candidates)
    }

    /// Build a theme straight from a seed color.
    pub fn from_seed(&self, seed: Argb) -> Theme {
        self.build(seed, vec![seed])
    }

    fn build(&self, seed: Argb, candidates: Vec<Argb>) -> Theme {
        let palette = match self.palette_style {
            PaletteStyle::Tonal => CorePalette::of(seed),
            PaletteStyle::Content => CorePalette::content_of(seed),
        };
        let light = Scheme::resolve(&palette, &Scheme::specs(false, &self.custom_roles));
        let dark = Scheme::resolve(&palette, &Scheme::specs(true, &self.custom_roles));

        Theme {
            seed,
            candidates,
            palette_style: self.palette_style,
            palette,
            light,
            dark,
        }
    }
}

impl Default for ThemeExtractor {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}
