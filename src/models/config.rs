use std::path::Path;

use hct_core::{Argb, PaletteRole};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Theme configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Color budget for image quantization
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// How palettes are derived from the seed
    #[serde(default)]
    pub palette_style: PaletteStyle,

    /// Fixed seed color; skips extraction when set
    #[serde(default)]
    pub seed: Option<Argb>,

    /// Extra scheme roles, appended to the light and dark tables
    #[serde(default)]
    pub custom_roles: IndexMap<String, RoleOverride>,
}

fn default_max_colors() -> usize {
    128
}

/// Palette derivation style
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaletteStyle {
    /// Accents boosted to a minimum chroma
    #[default]
    Tonal,
    /// Accents follow the seed's own chroma
    Content,
}

/// A scheme role defined in configuration
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RoleOverride {
    pub palette: PaletteRole,
    pub light_tone: u8,
    pub dark_tone: u8,
}

impl ThemeConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            max_colors = config.max_colors,
            custom_roles = config.custom_roles.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=256).contains(&self.max_colors) {
            return Err(ConfigError::Invalid(format!(
                "max_colors must be in 1..=256, got {}",
                self.max_colors
            )));
        }

        for (name, role) in &self.custom_roles {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("custom role name is empty".to_string()));
            }
            for tone in [role.light_tone, role.dark_tone] {
                if tone > 100 {
                    return Err(ConfigError::Invalid(format!(
                        "custom role '{name}' has tone {tone} (max 100)"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            palette_style: PaletteStyle::default(),
            seed: None,
            custom_roles: IndexMap::new(),
        }
    }
}
