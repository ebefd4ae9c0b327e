//! Error types for palette operations

use thiserror::Error;

/// Error type for parsing a [`PaletteRole`](super::PaletteRole) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette role '{0}' (expected primary, secondary, tertiary, neutral, neutral_variant or error)")]
pub struct ParseRoleError(pub String);
