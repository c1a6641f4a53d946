use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use crate::color::wavelength_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Diffraction plots (central panel)
// ---------------------------------------------------------------------------

/// Render the two stacked intensity plots: single slit above, double slit
/// below. Both curves take the colour of the simulated light; the
/// double-slit plot also shows the single-slit envelope as a dashed line.
pub fn diffraction_plots(ui: &mut Ui, state: &AppState) {
    let color = wavelength_color(state.params.wavelength_nm);
    let curves = &state.curves;
    let plot_height = (ui.available_height() - 12.0) / 2.0;

    Plot::new("single_slit_plot")
        .height(plot_height)
        .legend(Legend::default())
        .x_axis_label("Position on screen (m)")
        .y_axis_label("Intensity")
        .include_y(0.0)
        .include_y(1.05)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(curve_points(&curves.positions, &curves.single))
                    .name("Single slit")
                    .color(color)
                    .width(1.5),
            );
        });

    ui.add_space(12.0);

    Plot::new("double_slit_plot")
        .height(plot_height)
        .legend(Legend::default())
        .x_axis_label("Position on screen (m)")
        .y_axis_label("Intensity")
        .include_y(0.0)
        .include_y(1.05)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(curve_points(&curves.positions, &curves.single))
                    .name("Envelope")
                    .color(color.gamma_multiply(0.4))
                    .style(LineStyle::dashed_loose())
                    .width(1.0),
            );
            plot_ui.line(
                Line::new(curve_points(&curves.positions, &curves.double))
                    .name("Double slit")
                    .color(color)
                    .width(1.5),
            );
        });
}

fn curve_points<'a>(xs: &[f64], ys: &[f64]) -> PlotPoints<'a> {
    xs.iter().zip(ys.iter()).map(|(&x, &y)| [x, y]).collect()
}
