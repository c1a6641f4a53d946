use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::wavelength_color;
use crate::physics::axis::ScreenAxis;
use crate::physics::params::SlitParams;
use crate::preset::{self, Preset};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – parameter sliders
// ---------------------------------------------------------------------------

/// Render the left parameter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Light ----
            ui.strong("Light");
            let swatch = wavelength_color(state.params.wavelength_nm);
            ui.horizontal(|ui: &mut Ui| {
                changed |= ui
                    .add(
                        egui::Slider::new(
                            &mut state.params.wavelength_nm,
                            SlitParams::WAVELENGTH_RANGE_NM,
                        )
                        .text("λ (nm)"),
                    )
                    .changed();
                ui.label(RichText::new("■").size(16.0).color(swatch));
            });
            ui.separator();

            // ---- Slits ----
            ui.strong("Slits");
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut state.params.slit_width_mm,
                        SlitParams::SLIT_WIDTH_RANGE_MM,
                    )
                    .text("width a (mm)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut state.params.slit_separation_mm,
                        SlitParams::SLIT_SEPARATION_RANGE_MM,
                    )
                    .text("separation d (mm)"),
                )
                .changed();
            ui.separator();

            // ---- Screen ----
            ui.strong("Screen");
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut state.params.screen_distance_m,
                        SlitParams::SCREEN_DISTANCE_RANGE_M,
                    )
                    .text("distance L (m)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut state.screen.half_width_mm,
                        ScreenAxis::HALF_WIDTH_RANGE_MM,
                    )
                    .text("window ± (mm)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut state.screen.samples, ScreenAxis::SAMPLES_RANGE)
                        .text("samples"),
                )
                .changed();
            ui.separator();

            // ---- Presets ----
            ui.strong("Presets");
            egui::ComboBox::from_id_salt("preset_picker")
                .selected_text("Apply preset…")
                .show_ui(ui, |ui: &mut Ui| {
                    for preset in preset::builtin_presets() {
                        if ui.selectable_label(false, &preset.name).clicked() {
                            log::info!("Applying preset '{}'", preset.name);
                            state.apply_params(preset.params);
                        }
                    }
                });
            if ui.button("Reset to defaults").clicked() {
                state.apply_params(SlitParams::default());
            }
        });

    if changed {
        state.recompute();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the regime verdict.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export curves as CSV…").clicked() {
                export_csv_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save preset…").clicked() {
                save_preset_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load preset…").clicked() {
                load_preset_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.fraunhofer_ok {
            ui.label(
                RichText::new("✓ Fraunhofer far-field condition holds")
                    .color(Color32::from_rgb(0, 160, 60)),
            );
        } else {
            ui.label(
                RichText::new(format!(
                    "✗ Near-field regime (screen must be ≥ {:.2} m away)",
                    state.min_far_field_distance_m
                ))
                .color(Color32::RED),
            );
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

fn export_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export diffraction curves")
        .add_filter("CSV", &["csv"])
        .set_file_name("diffraction_curves.csv")
        .save_file();

    if let Some(path) = file {
        match crate::export::export_csv(&path, &state.curves) {
            Ok(()) => {
                log::info!(
                    "Exported {} samples to {}",
                    state.curves.positions.len(),
                    path.display()
                );
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export curves: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn save_preset_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save parameter preset")
        .add_filter("JSON", &["json"])
        .set_file_name("preset.json")
        .save_file();

    if let Some(path) = file {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("preset")
            .to_string();
        let preset = Preset {
            name,
            params: state.params,
        };
        match preset::save_preset(&path, &preset) {
            Ok(()) => {
                log::info!("Saved preset '{}' to {}", preset.name, path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save preset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn load_preset_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load parameter preset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match preset::load_preset(&path) {
            Ok(preset) => {
                log::info!("Loaded preset '{}' from {}", preset.name, path.display());
                state.apply_params(preset.params);
            }
            Err(e) => {
                log::error!("Failed to load preset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
