use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use ggplot::data::model::CorrectedLog;

/// Number of colour steps used for gradient modes.
pub const GRADIENT_STEPS: usize = 16;

// ---------------------------------------------------------------------------
// Gradient generator
// ---------------------------------------------------------------------------

/// Generates `n` colours running from blue (low) to red (high).
pub fn generate_gradient(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let f = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let hsl = Hsl::new(240.0 * (1.0 - f), 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Point colouring for the GG diagram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Uniform,
    /// Early samples blue, late samples red.
    Time,
    /// Colour by vertical acceleration.
    Vertical,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Uniform, ColorMode::Time, ColorMode::Vertical];

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Uniform => "Uniform",
            ColorMode::Time => "Time",
            ColorMode::Vertical => "Vertical accel.",
        }
    }
}

/// A group of GG points sharing one colour.
#[derive(Debug, Clone)]
pub struct PointGroup {
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Split the GG points into colour groups according to `mode`.
pub fn group_points(log: &CorrectedLog, mode: ColorMode) -> Vec<PointGroup> {
    if mode == ColorMode::Uniform {
        return vec![PointGroup {
            color: Color32::LIGHT_BLUE,
            points: log.gg_points().collect(),
        }];
    }

    let gradient = generate_gradient(GRADIENT_STEPS);
    let mut groups: Vec<PointGroup> = gradient
        .iter()
        .map(|&color| PointGroup {
            color,
            points: Vec::new(),
        })
        .collect();

    let n = log.len();
    let (vmin, vmax) = log
        .vert
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let vrange = vmax - vmin;

    for (i, point) in log.gg_points().enumerate() {
        let step = match mode {
            ColorMode::Time => i * GRADIENT_STEPS / n.max(1),
            ColorMode::Vertical if vrange > f64::EPSILON => {
                (((log.vert[i] - vmin) / vrange) * GRADIENT_STEPS as f64) as usize
            }
            _ => 0,
        };
        groups[step.min(GRADIENT_STEPS - 1)].points.push(point);
    }

    groups.retain(|g| !g.points.is_empty());
    groups
}
