use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use super::{empty_hint, panels};
use crate::data::filter::ClassFilter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data Explorer section
// ---------------------------------------------------------------------------

pub fn explorer(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        empty_hint(ui);
        return;
    }

    filter_bar(ui, state);
    ui.separator();

    let mut clicked_page = None;
    egui::TopBottomPanel::bottom("pagination")
        .show_separator_line(false)
        .show_inside(ui, |ui: &mut Ui| {
            clicked_page = pagination(ui, state);
        });

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| table(ui, state));

    if let Some(page) = clicked_page {
        state.go_to_page(page);
    }
}

/// Search and class changes apply at once; range bounds wait for "Apply".
fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    let mut changed = false;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Search");
        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut state.filter_form.search)
                    .hint_text("any value…")
                    .desired_width(180.0),
            )
            .changed();

        let form = &mut state.filter_form;
        egui::ComboBox::from_id_salt("class_filter")
            .selected_text(form.class.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for option in ClassFilter::OPTIONS {
                    changed |= ui
                        .selectable_value(&mut form.class, option, option.to_string())
                        .changed();
                }
            });

        ui.separator();
        ui.label("Heart rate");
        ui.add(
            egui::TextEdit::singleline(&mut form.hr_min)
                .hint_text("min")
                .desired_width(60.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.hr_max)
                .hint_text("max")
                .desired_width(60.0),
        );
        if ui.button("Apply").clicked() {
            changed = true;
        }

        ui.separator();
        if ui.button("Export CSV…").clicked() {
            panels::export_rows_dialog(state);
        }
    });

    if changed {
        state.apply_filters();
    }
}

fn table(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    let page = state.current_page();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), ds.headers.len().max(1))
        .header(22.0, |mut header| {
            for h in &ds.headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            if page.is_empty() {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.weak("No data to display");
                    });
                });
                return;
            }
            body.rows(20.0, page.len(), |mut row| {
                let record = &ds.rows[page[row.index()]];
                for value in &record.fields {
                    row.col(|ui: &mut Ui| {
                        ui.label(if value.is_empty() { "-" } else { value.as_str() });
                    });
                }
            });
        });
}

/// Page buttons; returns the page the user picked, if any.
fn pagination(ui: &mut Ui, state: &AppState) -> Option<usize> {
    let total = state.visible_indices.len();
    let mut picked = None;
    ui.horizontal(|ui: &mut Ui| {
        for page in state.pager.page_buttons(total, state.config.page_button_limit) {
            if ui
                .selectable_label(page == state.pager.page, page.to_string())
                .clicked()
            {
                picked = Some(page);
            }
        }
        let pages = state.total_pages();
        if pages > state.config.page_button_limit {
            ui.weak(format!("({pages} pages)"));
        }
    });
    picked
}
