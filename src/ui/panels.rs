use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use tilt_viewer::data::loader::{self, Format};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – figure list
// ---------------------------------------------------------------------------

/// Render the left panel listing every figure received so far.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Figures");
    ui.separator();

    if state.figures.is_empty() {
        ui.label("No figures yet.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, figure) in state.figures.iter().enumerate() {
                let label = format!("{}. {}", idx + 1, figure.title);
                if ui
                    .selectable_label(state.selected == Some(idx), label)
                    .clicked()
                {
                    state.selected = Some(idx);
                }
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
            let can_save = state.opened.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new("Save As…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} figures", state.figures.len()));

        if let Some(opened) = &state.opened {
            ui.separator();
            ui.label(format!(
                "{}: {} samples, {} despiked",
                opened.path.display(),
                opened.series.len(),
                opened.spikes_removed()
            ));
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

fn tilt_dialog(title: &str) -> rfd::FileDialog {
    let all: Vec<&str> = Format::TEXT_EXTENSIONS
        .iter()
        .chain(Format::BINARY_EXTENSIONS)
        .copied()
        .collect();
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Tilt data", all.as_slice())
        .add_filter("Text", Format::TEXT_EXTENSIONS)
        .add_filter("Binary", Format::BINARY_EXTENSIONS)
}

pub fn open_file_dialog(state: &mut AppState) {
    let Some(path) = tilt_dialog("Open tiltmeter data").pick_file() else {
        return;
    };

    match loader::load_file(&path) {
        Ok(series) => state.set_series(path, series),
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let Some(opened) = &state.opened else {
        return;
    };
    let file_name = opened
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(path) = tilt_dialog("Save tiltmeter data")
        .set_file_name(file_name)
        .save_file()
    else {
        return;
    };

    match loader::save_file(&opened.series, &path) {
        Ok(()) => state.status_message = None,
        Err(e) => {
            log::error!("Failed to save file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
