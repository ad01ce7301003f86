use eframe::egui::Ui;
use egui_plot::{Plot, PlotBounds, PlotPoints, Points};

use crate::state::AppState;

pub const X_LABEL: &str = "Longitudinal acceleration (g)";
pub const Y_LABEL: &str = "Lateral acceleration (g)";

/// Both axes are ranged [-AXIS_LIMIT, AXIS_LIMIT].
pub const AXIS_LIMIT: f64 = 1.0;

/// The fixed GG diagram frame.
pub fn gg_bounds() -> PlotBounds {
    PlotBounds::from_min_max([-AXIS_LIMIT, -AXIS_LIMIT], [AXIS_LIMIT, AXIS_LIMIT])
}

// ---------------------------------------------------------------------------
// GG diagram (central panel)
// ---------------------------------------------------------------------------

/// Render the longitudinal vs. lateral scatter plot.
pub fn gg_plot(ui: &mut Ui, state: &AppState) {
    if state.corrected.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a drive log to view the GG diagram  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.title);
    });

    // Square widget so the fixed frame keeps 1:1 scaling.
    Plot::new("gg_plot")
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .view_aspect(1.0)
        .show_grid(true)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(gg_bounds());
            for group in &state.groups {
                let points: PlotPoints = group.points.iter().copied().collect();
                plot_ui.points(Points::new(points).radius(1.5).color(group.color));
            }
        });
}
