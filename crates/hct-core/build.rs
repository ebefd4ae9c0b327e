use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// sRGB channel (0..=255) to linear light on a 0..=100 scale.
///
/// The breakpoint 0.040449936 is the exact intersection of the linear
/// segment and the power curve, slightly below the IEC 61966-2-1 value.
fn linearized_exact(component: u8) -> f64 {
    let normalized = component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("linearized_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // `{:?}` prints the shortest representation that parses back to the
    // same f64, so table lookups are bit-identical to the formula.
    writeln!(file, "/// Linearized sRGB channel values, 0..=100 scale").unwrap();
    writeln!(file, "/// Index: 8-bit sRGB channel, Value: linear light * 100").unwrap();
    writeln!(file, "pub static LINEARIZED: [f64; 256] = [").unwrap();
    for i in 0..=255u8 {
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linearized_exact(i)).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
