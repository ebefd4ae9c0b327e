//! Test fixtures and constants.

use hct_core::Argb;

/// Well-known colors
pub mod colors {
    use hct_core::Argb;

    pub const GOOGLE_BLUE: Argb = Argb(0xFF42_85F4);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const MID_GRAY: Argb = Argb(0xFF80_8080);
}

/// Image made of solid runs of colors, in order
pub fn stripes(runs: &[(Argb, usize)]) -> Vec<Argb> {
    runs.iter()
        .flat_map(|&(color, count)| std::iter::repeat(color).take(count))
        .collect()
}

/// A smooth red-to-blue ramp with `len` pixels
pub fn gradient(len: usize) -> Vec<Argb> {
    (0..len)
        .map(|i| {
            let t = (i * 255 / len.max(1)) as u8;
            Argb::from_rgb(255 - t, t / 3, t)
        })
        .collect()
}

/// A complete configuration file exercising every field
pub const FULL_CONFIG_YAML: &str = r##"
max_colors: 64
palette_style: content
seed: "#FF4285F4"
custom_roles:
  brand:
    palette: tertiary
    light_tone: 40
    dark_tone: 80
  link:
    palette: a1
    light_tone: 30
    dark_tone: 70
"##;
