use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::series_color;
use crate::state::AppState;
use crate::ui::figure::TraceStyle;

// ---------------------------------------------------------------------------
// Tilt plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected figure in the central panel.
pub fn tilt_plot(ui: &mut Ui, state: &AppState) {
    let Some((idx, figure)) = state.selected_figure() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view tilt data  (File → Open…)");
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.title);
    });

    Plot::new(("tilt_plot", idx))
        .legend(egui_plot::Legend::default())
        .x_axis_label(figure.h_label.as_str())
        .y_axis_label(figure.v_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in &figure.traces {
                let color = trace.color.unwrap_or_else(|| series_color(idx));
                let points: PlotPoints = trace.points.iter().copied().collect();

                match trace.style {
                    TraceStyle::Points => {
                        let points = Points::new(points)
                            .name(&trace.name)
                            .color(color)
                            .radius(1.5);
                        plot_ui.points(points);
                    }
                    TraceStyle::Line => {
                        let line = Line::new(points)
                            .name(&trace.name)
                            .color(color)
                            .width(1.5);
                        plot_ui.line(line);
                    }
                }
            }
        });
}
