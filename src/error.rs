use std::path::PathBuf;

use hct_core::{ParseColorError, ParseRoleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid color: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("Invalid palette: {0}")]
    ParseRole(#[from] ParseRoleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_error_unknown_role() {
        let error = ThemeError::UnknownRole("accent".to_string());
        assert_eq!(error.to_string(), "Unknown role: accent");
    }

    #[test]
    fn test_theme_error_from_parse_color() {
        let parse: ParseColorError = "#12".parse::<hct_core::Argb>().unwrap_err();
        let error: ThemeError = parse.into();
        match error {
            ThemeError::ParseColor(_) => {}
            _ => panic!("Expected ParseColor variant"),
        }
        assert!(error.to_string().starts_with("Invalid color: "));
    }

    #[test]
    fn test_theme_error_from_parse_role() {
        let parse = "accent".parse::<hct_core::PaletteRole>().unwrap_err();
        let error: ThemeError = parse.into();
        match error {
            ThemeError::ParseRole(_) => {}
            _ => panic!("Expected ParseRole variant"),
        }
    }

    #[test]
    fn test_config_error_invalid() {
        let error = ConfigError::Invalid("max_colors must be in 1..=256, got 0".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: max_colors must be in 1..=256, got 0"
        );
    }

    #[test]
    fn test_config_error_io_names_path() {
        let error = ConfigError::Io {
            path: PathBuf::from("/nonexistent/theme.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read /nonexistent/theme.yaml: not found"
        );
    }

    #[test]
    fn test_theme_error_from_config_error() {
        let error: ThemeError = ConfigError::Invalid("bad".to_string()).into();
        assert_eq!(error.to_string(), "Configuration error: Invalid configuration: bad");
    }
}
