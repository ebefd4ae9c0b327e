//! Scheme assembly against fixed palettes.

mod common;

use common::fixtures::colors;
use hct_core::{Argb, CorePalette, PaletteRole};
use pretty_assertions::assert_eq;
use tonal_theme::models::{DARK_ROLES, LIGHT_ROLES};
use tonal_theme::{RoleSpec, Scheme};

#[test]
fn test_every_row_resolves_to_its_palette_tone() {
    let palette = CorePalette::of(colors::GOOGLE_BLUE);
    for (table, scheme) in [
        (LIGHT_ROLES, Scheme::light(&palette)),
        (DARK_ROLES, Scheme::dark(&palette)),
    ] {
        assert_eq!(scheme.len(), table.len());
        for (name, spec) in table {
            assert_eq!(
                scheme.get(name),
                Some(&palette.tone(spec.palette, spec.tone)),
                "role {name}"
            );
        }
    }
}

#[test]
fn test_from_table_with_custom_rows() {
    let palette = CorePalette::of(colors::GOOGLE_BLUE);
    let rows = [
        ("accent", RoleSpec::new(PaletteRole::Primary, 40)),
        ("danger", RoleSpec::new(PaletteRole::Error, 40)),
    ];

    let scheme = Scheme::from_table(&palette, &rows);
    let pairs: Vec<(&str, Argb)> = scheme.iter().map(|(name, color)| (name, *color)).collect();
    assert_eq!(
        pairs,
        vec![("accent", Argb(0xFF00_5AC5)), ("danger", Argb(0xFFBA_1B1B))]
    );
}

#[test]
fn test_schemes_are_legible_for_many_seeds() {
    for seed in [0xFFFF_0000u32, 0xFF00_FF00, 0xFF00_00FF, 0xFF80_7070, 0xFFFF_FF00, 0xFF12_3456] {
        let palette = CorePalette::of(Argb(seed));
        common::assert_all_opaque(&Scheme::light(&palette));
        common::assert_on_roles_contrast(&Scheme::light(&palette), 39.0);
        common::assert_on_roles_contrast(&Scheme::dark(&palette), 39.0);
    }
}

#[test]
fn test_shadow_and_scrim_are_black() {
    let palette = CorePalette::of(colors::GOOGLE_BLUE);
    for scheme in [Scheme::light(&palette), Scheme::dark(&palette)] {
        assert_eq!(scheme.get("shadow"), Some(&Argb::BLACK));
        assert_eq!(scheme.get("scrim"), Some(&Argb::BLACK));
    }
}
