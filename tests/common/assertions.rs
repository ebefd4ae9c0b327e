//! Assertion helpers for tests.

use hct_core::color::lstar_from_argb;
use hct_core::Argb;
use tonal_theme::RoleMap;

/// Assert a color's L* is within `tolerance` of `tone`
pub fn assert_tone_near(color: Argb, tone: f64, tolerance: f64) {
    let lstar = lstar_from_argb(color);
    assert!(
        (lstar - tone).abs() <= tolerance,
        "Expected {} to have tone {:.1} +/- {}, got {:.3}",
        color,
        tone,
        tolerance,
        lstar
    );
}

/// Assert every color in a scheme is fully opaque
pub fn assert_all_opaque(scheme: &RoleMap<Argb>) {
    for (name, color) in scheme.iter() {
        assert!(color.is_opaque(), "Role {} has translucent color {}", name, color);
    }
}

/// Assert text roles are at least `min_tones` of L* away from their background
pub fn assert_on_roles_contrast(scheme: &RoleMap<Argb>, min_tones: f64) {
    for (name, color) in scheme.iter() {
        let Some(base) = name.strip_prefix("on") else {
            continue;
        };
        let mut chars = base.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        let base: String = first.to_lowercase().chain(chars).collect();
        let background = scheme
            .get(&base)
            .unwrap_or_else(|| panic!("Role {} has no background role {}", name, base));

        let difference = (lstar_from_argb(*color) - lstar_from_argb(*background)).abs();
        assert!(
            difference >= min_tones,
            "Role {} is only {:.2} tones from {}",
            name,
            difference,
            base
        );
    }
}
