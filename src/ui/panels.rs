use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::columns::ColumnRef;
use crate::state::{AppState, Section};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the section list. Switching only changes what is shown.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.heading("ECG Dashboard");
    ui.separator();

    for section in Section::ALL {
        let selected = state.section == section;
        if ui
            .add_sized(
                [ui.available_width(), 28.0],
                egui::SelectableLabel::new(selected, section.title()),
            )
            .clicked()
        {
            state.set_section(section);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui: &mut Ui| {
        ui.add_space(6.0);
        roles_summary(ui, state);
    });
}

fn roles_summary(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        return;
    }
    fn name(c: &Option<ColumnRef>) -> &str {
        c.as_ref().map_or("not found", |c| c.name.as_str())
    }
    // bottom_up layout: last line first
    ui.small(format!("QRS: {}", name(&state.roles.qrs)));
    ui.small(format!("Heart rate: {}", name(&state.roles.heart_rate)));
    ui.small(format!("Class: {}", name(&state.roles.class)));
    ui.label(RichText::new("Detected columns").color(color::MUTED_TEXT));
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
            ui.separator();
            let loaded = state.dataset.is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Export filtered rows…"))
                .clicked()
            {
                export_rows_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(loaded, egui::Button::new("Export analysis report…"))
                .clicked()
            {
                export_report_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let file = state
                .source
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{file}  {} rows, {} shown",
                ds.len(),
                state.visible_indices.len()
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

/// Ask for a CSV file and load it. Cancelling the dialog does nothing.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open ECG data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load `path` into the dashboard, reporting failures in the top bar.
pub fn load_path(state: &mut AppState, path: &Path) {
    if let Err(e) = state.load_path(path) {
        state.report_error(e);
    }
}

pub fn export_rows_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered rows")
        .set_file_name("filtered_rows.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_visible_rows(&path) {
            state.report_error(e);
        }
    }
}

pub fn export_report_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export analysis report")
        .set_file_name("analysis_report.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_report(&path) {
            state.report_error(e);
        }
    }
}
