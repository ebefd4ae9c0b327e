//! Scheme assembly: role tables resolved against a [`CorePalette`].

use hct_core::{Argb, CorePalette};
use indexmap::IndexMap;

use crate::models::{RoleMap, RoleOverride, RoleRow, RoleSpec, DARK_ROLES, LIGHT_ROLES};

/// Builds light and dark color schemes from palettes
pub struct Scheme;

impl Scheme {
    /// The standard light scheme
    pub fn light(palette: &CorePalette) -> RoleMap<Argb> {
        Self::from_table(palette, LIGHT_ROLES)
    }

    /// The standard dark scheme
    pub fn dark(palette: &CorePalette) -> RoleMap<Argb> {
        Self::from_table(palette, DARK_ROLES)
    }

    /// Resolve every row of `rows` to a color
    pub fn from_table(palette: &CorePalette, rows: &[RoleRow]) -> RoleMap<Argb> {
        let specs: RoleMap<RoleSpec> = rows.iter().copied().collect();
        Self::resolve(palette, &specs)
    }

    /// Role specs for the light or dark table with custom roles appended
    ///
    /// A custom role that reuses a standard name replaces that row in place.
    pub fn specs(dark: bool, custom_roles: &IndexMap<String, RoleOverride>) -> RoleMap<RoleSpec> {
        let base = if dark { DARK_ROLES } else { LIGHT_ROLES };
        let mut specs: RoleMap<RoleSpec> = base.iter().copied().collect();
        for (name, role) in custom_roles {
            let tone = if dark { role.dark_tone } else { role.light_tone };
            specs.insert(name.clone(), RoleSpec::new(role.palette, tone));
        }
        specs
    }

    /// Look up each spec in `palette`
    pub fn resolve(palette: &CorePalette, specs: &RoleMap<RoleSpec>) -> RoleMap<Argb> {
        specs.map(|spec| palette.tone(spec.palette, spec.tone))
    }
}
