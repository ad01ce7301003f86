use std::path::{Path, PathBuf};

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::data::correction::{pitch_matrix, roll_matrix, yaw_matrix};
use crate::error::{Error, Result};

/// Directory holding the bundled drive logs.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Log opened when no path is given on the command line.
pub const DEFAULT_LOG_FILE: &str = "trento_levico.csv";

pub const DEFAULT_TITLE: &str = "GG plot, Trento-Levico, Ford Fiesta mk6 1.4 TDI";

/// Standard gravity used to turn m/s² into g.
pub const STANDARD_GRAVITY: f64 = 9.81;

pub fn default_log_path() -> PathBuf {
    Path::new(DATA_DIR).join(DEFAULT_LOG_FILE)
}

// ---------------------------------------------------------------------------
// Mount configuration
// ---------------------------------------------------------------------------

/// How the phone sits in the vehicle relative to the direction of travel.
///
/// The defaults describe an HTC Sensation held upright, its upper edge tilted
/// about 25° towards the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Rotation about the device Y axis, degrees.
    pub pitch_deg: f64,
    /// Rotation about the device Z axis, degrees.
    pub yaw_deg: f64,
    /// Rotation about the device X axis, degrees.
    pub roll_deg: f64,
    /// Acceleration that maps to 1 g, m/s².
    pub gravity: f64,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            pitch_deg: 0.0,
            yaw_deg: 0.0,
            roll_deg: -25.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl MountConfig {
    /// A mount with no angular correction.
    pub fn level() -> Self {
        Self {
            pitch_deg: 0.0,
            yaw_deg: 0.0,
            roll_deg: 0.0,
            gravity: STANDARD_GRAVITY,
        }
    }

    /// Read a mount description from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let mount: MountConfig = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        mount.validate()?;
        Ok(mount)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("pitch", self.pitch_deg),
            ("yaw", self.yaw_deg),
            ("roll", self.roll_deg),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidMount(format!("{name} angle is {value}")));
            }
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(Error::InvalidMount(format!(
                "gravity must be a positive number, got {}",
                self.gravity
            )));
        }
        Ok(())
    }

    /// Combined device → vehicle rotation: roll first, then pitch, then yaw.
    pub fn rotation(&self) -> Matrix3<f64> {
        yaw_matrix(self.yaw_deg.to_radians())
            * pitch_matrix(self.pitch_deg.to_radians())
            * roll_matrix(self.roll_deg.to_radians())
    }
}

// ---------------------------------------------------------------------------
// Loader configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field separator byte, `;` for the phone logger.
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}
