use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::state::AppState;
use crate::ui::figure::{Figure, FigureQueue};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TiltViewerApp {
    pub state: AppState,
}

impl TiltViewerApp {
    pub fn new(queue: FigureQueue, incoming: Receiver<Figure>) -> Self {
        Self {
            state: AppState::new(queue, incoming),
        }
    }
}

impl eframe::App for TiltViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Figures submitted since the last frame.
        self.state.drain_figures(false);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: figure list ----
        egui::SidePanel::left("figure_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::tilt_plot(ui, &self.state);
        });
    }
}
