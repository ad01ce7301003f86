//! Writes a synthetic drive log in the phone logger's 16-column layout.
//!
//! Usage: `generate_sample [OUTPUT]` (default `<crate>/data/sample_drive.csv`).

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nalgebra::{Matrix3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ggplot::config::{DATA_DIR, MountConfig};
use ggplot::data::model::Channel;

const RATE_HZ: f64 = 20.0;
const DURATION_S: f64 = 600.0;
const SAMPLE_FILE: &str = "sample_drive.csv";

/// Vehicle-frame acceleration `[long, later, vert]` in g at time `t`.
///
/// Gentle acceleration/braking cycles overlaid on a winding road.
fn vehicle_accel(t: f64) -> [f64; 3] {
    let long = 0.25 * (2.0 * PI * t / 45.0).sin() + 0.1 * (2.0 * PI * t / 7.0).sin();
    let later = 0.45 * (2.0 * PI * t / 30.0).sin() * (2.0 * PI * t / 210.0).cos();
    [long, later, 1.0]
}

/// Undo the viewer's correction: vehicle frame (g) → raw phone axes (m/s²).
fn to_device(rotation: &Matrix3<f64>, gravity: f64, accel: [f64; 3]) -> [f64; 3] {
    let [long, later, vert] = accel;
    let rotated = Vector3::new(-later, vert, long);
    let device = rotation.transpose() * rotated * gravity;
    [device[0], -device[1], device[2]]
}

fn default_output() -> PathBuf {
    Path::new(DATA_DIR).join(SAMPLE_FILE)
}

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_output);

    let mount = MountConfig::default();
    let rotation = mount.rotation();
    let mut rng = StdRng::seed_from_u64(42);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(Channel::ALL.iter().map(|c| c.name()))?;

    let n = (DURATION_S * RATE_HZ) as usize;
    for i in 0..n {
        let t = i as f64 / RATE_HZ;
        let [ax, ay, az] = to_device(&rotation, mount.gravity, vehicle_accel(t));
        let row = [
            ax + rng.gen_range(-0.25..0.25),
            ay + rng.gen_range(-0.25..0.25),
            az + rng.gen_range(-0.25..0.25),
            rng.gen_range(-0.03..0.03),
            rng.gen_range(-0.03..0.03),
            rng.gen_range(-0.03..0.03),
            22.0 + rng.gen_range(-0.8..0.8),
            -4.0 + rng.gen_range(-0.8..0.8),
            -38.0 + rng.gen_range(-0.8..0.8),
            (t * 1.5) % 360.0,
            -65.0,
            0.0,
            31.0,
            0.0,
            4.1 - 0.2 * t / DURATION_S,
            t,
        ];
        writer.write_record(row.iter().map(|v| format!("{v:.5}")))?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {n} samples ({DURATION_S} s at {RATE_HZ} Hz) to {}",
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggplot::data::correction::to_vehicle_frame;

    #[test]
    fn test_generated_samples_correct_back_to_vehicle_frame() {
        let mount = MountConfig::default();
        let rotation = mount.rotation();
        for t in [0.0, 3.2, 17.5, 140.0] {
            let expected = vehicle_accel(t);
            let [ax, ay, az] = to_device(&rotation, mount.gravity, expected);
            // The viewer flips ay before rotating.
            let got = to_vehicle_frame(&rotation, mount.gravity, [ax, -ay, az]);
            for (g, e) in got.iter().zip(&expected) {
                assert!((g - e).abs() < 1e-12, "t={t}: {got:?} != {expected:?}");
            }
        }
    }

    #[test]
    fn test_default_output_lives_in_data_dir() {
        let path = default_output();
        assert!(path.starts_with(DATA_DIR));
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), SAMPLE_FILE);
    }
}
