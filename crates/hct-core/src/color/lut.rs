//! Linearization lookup table access
//!
//! The table is generated at compile time by build.rs. It covers every 8-bit
//! channel value, so lookups are exact and need no interpolation.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/linearized_lut.rs"));

/// Linear light (0.0..=100.0) of an 8-bit sRGB channel.
#[inline]
pub fn linearized(component: u8) -> f64 {
    LINEARIZED[component as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(component: u8) -> f64 {
        let normalized = component as f64 / 255.0;
        if normalized <= 0.040449936 {
            normalized / 12.92 * 100.0
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
        }
    }

    #[test]
    fn test_lut_endpoints() {
        assert_eq!(linearized(0), 0.0);
        assert!((linearized(255) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_lut_matches_formula_bit_for_bit() {
        for c in 0..=255u8 {
            assert_eq!(
                linearized(c).to_bits(),
                formula(c).to_bits(),
                "LUT entry {c} differs from formula"
            );
        }
    }

    #[test]
    fn test_lut_is_monotonic() {
        for c in 1..=255u8 {
            assert!(linearized(c) > linearized(c - 1), "LUT not increasing at {c}");
        }
    }
}
