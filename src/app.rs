use std::path::Path;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::{AppState, Section};
use crate::ui::{analysis, explorer, overview, panels, visualization};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EcgDashboardApp {
    pub state: AppState,
}

impl EcgDashboardApp {
    /// Start the dashboard, loading `initial` right away when given.
    pub fn new(config: DashboardConfig, initial: Option<&Path>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial {
            panels::load_path(&mut state, path);
        }
        Self { state }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
        if let Some(path) = dropped {
            panels::load_path(&mut self.state, &path);
        }
    }
}

impl eframe::App for EcgDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(180.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active section ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.state.section.title());
            ui.separator();

            let state = &mut self.state;
            match state.section {
                // The explorer manages its own scrolling.
                Section::Explorer => explorer::explorer(ui, state),
                section => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| match section {
                            Section::Overview => overview::overview(ui, state),
                            Section::Visualization => visualization::visualization(ui, state),
                            _ => analysis::analysis(ui, state),
                        });
                }
            }
        });
    }
}
