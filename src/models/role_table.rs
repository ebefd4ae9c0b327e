//! Material 3 scheme roles as (palette, tone) pairs.
//!
//! Light and dark tables list the same roles in the same order; only the
//! tones differ. Every `onX` role is at least 40 tones away from `x`.

use hct_core::PaletteRole;
use serde::{Deserialize, Serialize};

use hct_core::PaletteRole::{Error, Neutral, NeutralVariant, Primary, Secondary, Tertiary};

/// Where a scheme role takes its color from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub palette: PaletteRole,
    pub tone: u8,
}

impl RoleSpec {
    pub const fn new(palette: PaletteRole, tone: u8) -> Self {
        Self { palette, tone }
    }
}

/// One row of a role table
pub type RoleRow = (&'static str, RoleSpec);

const fn row(name: &'static str, palette: PaletteRole, tone: u8) -> RoleRow {
    (name, RoleSpec::new(palette, tone))
}

pub const LIGHT_ROLES: &[RoleRow] = &[
    row("primary", Primary, 40),
    row("onPrimary", Primary, 100),
    row("primaryContainer", Primary, 90),
    row("onPrimaryContainer", Primary, 10),
    row("secondary", Secondary, 40),
    row("onSecondary", Secondary, 100),
    row("secondaryContainer", Secondary, 90),
    row("onSecondaryContainer", Secondary, 10),
    row("tertiary", Tertiary, 40),
    row("onTertiary", Tertiary, 100),
    row("tertiaryContainer", Tertiary, 90),
    row("onTertiaryContainer", Tertiary, 10),
    row("error", Error, 40),
    row("onError", Error, 100),
    row("errorContainer", Error, 90),
    row("onErrorContainer", Error, 10),
    row("background", Neutral, 99),
    row("onBackground", Neutral, 10),
    row("surface", Neutral, 99),
    row("onSurface", Neutral, 10),
    row("surfaceVariant", NeutralVariant, 90),
    row("onSurfaceVariant", NeutralVariant, 30),
    row("outline", NeutralVariant, 50),
    row("outlineVariant", NeutralVariant, 80),
    row("shadow", Neutral, 0),
    row("scrim", Neutral, 0),
    row("inverseSurface", Neutral, 20),
    row("inverseOnSurface", Neutral, 95),
    row("inversePrimary", Primary, 80),
];

pub const DARK_ROLES: &[RoleRow] = &[
    row("primary", Primary, 80),
    row("onPrimary", Primary, 20),
    row("primaryContainer", Primary, 30),
    row("onPrimaryContainer", Primary, 90),
    row("secondary", Secondary, 80),
    row("onSecondary", Secondary, 20),
    row("secondaryContainer", Secondary, 30),
    row("onSecondaryContainer", Secondary, 90),
    row("tertiary", Tertiary, 80),
    row("onTertiary", Tertiary, 20),
    row("tertiaryContainer", Tertiary, 30),
    row("onTertiaryContainer", Tertiary, 90),
    row("error", Error, 80),
    row("onError", Error, 20),
    row("errorContainer", Error, 30),
    row("onErrorContainer", Error, 90),
    row("background", Neutral, 10),
    row("onBackground", Neutral, 90),
    row("surface", Neutral, 10),
    row("onSurface", Neutral, 90),
    row("surfaceVariant", NeutralVariant, 30),
    row("onSurfaceVariant", NeutralVariant, 80),
    row("outline", NeutralVariant, 60),
    row("outlineVariant", NeutralVariant, 30),
    row("shadow", Neutral, 0),
    row("scrim", Neutral, 0),
    row("inverseSurface", Neutral, 90),
    row("inverseOnSurface", Neutral, 20),
    row("inversePrimary", Primary, 40),
];
