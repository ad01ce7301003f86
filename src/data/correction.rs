use nalgebra::{Matrix3, Vector3};

use crate::config::MountConfig;
use crate::error::{Error, Result};

use super::model::{Channel, CorrectedLog, SensorLog, VehicleAxis};

// ---------------------------------------------------------------------------
// Mounting-angle rotations (angles in radians)
// ---------------------------------------------------------------------------

/// Rotation about the Y axis.
pub fn pitch_matrix(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Rotation about the X axis.
pub fn roll_matrix(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Rotation about the Z axis.
pub fn yaw_matrix(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

// ---------------------------------------------------------------------------
// Device frame → vehicle frame
// ---------------------------------------------------------------------------

/// Rotate one right-handed device sample (m/s²) into `[long, later, vert]` in g.
///
/// `rotation` is the combined matrix from [`MountConfig::rotation`].
pub fn to_vehicle_frame(rotation: &Matrix3<f64>, gravity: f64, accel: [f64; 3]) -> [f64; 3] {
    let v = Vector3::from(accel) / gravity;
    let r = rotation * v;
    [r[2], -r[0], r[1]]
}

/// Correct a raw recording for the phone's mounting orientation.
///
/// The device Y axis is flipped so that +X points left, +Y up and +Z ahead.
/// Each sample is then rotated by the mount angles, projected onto the
/// vehicle axes and every derived series is mean-centered.
pub fn correct(log: &SensorLog, mount: &MountConfig) -> Result<CorrectedLog> {
    mount.validate()?;

    let mut device = log.clone();
    for ay in device.channel_mut(Channel::Ay).iter_mut() {
        *ay = -*ay;
    }

    let rotation = mount.rotation();
    let n = device.len();
    let mut long = Vec::with_capacity(n);
    let mut later = Vec::with_capacity(n);
    let mut vert = Vec::with_capacity(n);

    let ax = device.channel(Channel::Ax);
    let ay = device.channel(Channel::Ay);
    let az = device.channel(Channel::Az);
    for i in 0..n {
        let [l, lat, v] = to_vehicle_frame(&rotation, mount.gravity, [ax[i], ay[i], az[i]]);
        long.push(l);
        later.push(lat);
        vert.push(v);
    }

    let offsets = [
        center(&mut long, VehicleAxis::Longitudinal)?,
        center(&mut later, VehicleAxis::Lateral)?,
        center(&mut vert, VehicleAxis::Vertical)?,
    ];
    log::debug!(
        "Removed offsets long={:.4} later={:.4} vert={:.4} g",
        offsets[0],
        offsets[1],
        offsets[2]
    );

    Ok(CorrectedLog {
        device,
        long,
        later,
        vert,
        offsets,
    })
}

// ---------------------------------------------------------------------------
// Centering
// ---------------------------------------------------------------------------

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Subtract the mean from every element and return the mean that was removed.
pub fn center(values: &mut [f64], axis: VehicleAxis) -> Result<f64> {
    let m = mean(values).ok_or(Error::EmptySeries {
        channel: axis.name(),
    })?;
    for v in values.iter_mut() {
        *v -= m;
    }
    Ok(m)
}
