use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use ggplot::config::{DATA_DIR, MountConfig};
use ggplot::data::model::{CorrectedLog, VehicleAxis};

use crate::color::ColorMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – mount angles, colouring, summary
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Mount");
            ui.separator();

            egui::Grid::new("mount_grid")
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    let m = &mut state.pending_mount;
                    for (label, value) in [
                        ("Pitch", &mut m.pitch_deg),
                        ("Yaw", &mut m.yaw_deg),
                        ("Roll", &mut m.roll_deg),
                    ] {
                        ui.label(label);
                        ui.add(
                            egui::DragValue::new(value)
                                .speed(0.5)
                                .range(-180.0..=180.0)
                                .suffix("°"),
                        );
                        ui.end_row();
                    }
                    ui.label("G");
                    ui.add(
                        egui::DragValue::new(&mut m.gravity)
                            .speed(0.01)
                            .range(0.1..=100.0)
                            .suffix(" m/s²"),
                    );
                    ui.end_row();
                });

            ui.horizontal(|ui: &mut Ui| {
                let dirty = state.pending_mount != state.mount;
                if ui.add_enabled(dirty, egui::Button::new("Apply")).clicked() {
                    if let Err(e) = state.apply_mount() {
                        state.report("Applying mount", e);
                    }
                }
                if ui.button("Reset").clicked() {
                    state.pending_mount = MountConfig::default();
                }
            });

            ui.add_space(8.0);
            ui.strong("Color by");
            egui::ComboBox::from_id_salt("color_by")
                .selected_text(state.color_mode.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in ColorMode::ALL {
                        if ui
                            .selectable_label(state.color_mode == mode, mode.label())
                            .clicked()
                        {
                            state.set_color_mode(mode);
                        }
                    }
                });

            if let Some(corrected) = &state.corrected {
                ui.add_space(8.0);
                ui.heading("Summary");
                ui.separator();
                ui.label(format!("{} samples", corrected.len()));
                if let Some(d) = corrected.device.duration() {
                    ui.label(format!("duration {d:.1}"));
                }
                summary_table(ui, corrected);
            }
        });
}

/// Offset, range and peak of each vehicle axis, in g.
fn summary_table(ui: &mut Ui, corrected: &CorrectedLog) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::auto().at_least(48.0), 4)
        .header(18.0, |mut header| {
            for title in ["axis", "offset", "min", "max", "peak"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for axis in VehicleAxis::ALL {
                let s = corrected.summary(axis);
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(axis.name());
                    });
                    for v in [s.offset, s.min, s.max, s.peak] {
                        row.col(|ui| {
                            ui.monospace(format!("{v:+.3}"));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load mount…").clicked() {
                open_mount_dialog(state);
                ui.close_menu();
            }
            let can_export = state.corrected.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(src) = &state.source {
            let name = src
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| src.display().to_string());
            ui.label(name);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open drive log")
        .set_directory(DATA_DIR)
        .add_filter("CSV", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.open(&path) {
            state.report("Opening log", e);
        }
    }
}

pub fn open_mount_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load mount configuration")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_mount(&path) {
            state.report("Loading mount", e);
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export corrected data")
        .set_file_name("gg_corrected.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => state.report("Export", e),
        }
    }
}
