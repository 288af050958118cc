use eframe::egui::Ui;

use super::{card, empty_hint, fmt2, stat_row};
use crate::data::model::ClassLabel;
use crate::data::stats::AnalysisReport;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Analysis section
// ---------------------------------------------------------------------------

pub fn analysis(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        empty_hint(ui);
        return;
    };

    ui.horizontal_wrapped(|ui: &mut Ui| {
        card(ui, "Statistical Summary", |ui: &mut Ui| summary(ui, report));
        card(ui, "Class Analysis", |ui: &mut Ui| classes(ui, report));
        card(ui, "Heart Rate Insights", |ui: &mut Ui| insights(ui, report));
        card(ui, "Recommendations", |ui: &mut Ui| recommendations(ui, report));
    });
}

fn summary(ui: &mut Ui, report: &AnalysisReport) {
    let hr = &report.heart_rate;
    stat_row(ui, "Mean:", fmt2(hr.mean));
    stat_row(ui, "Median:", fmt2(hr.median));
    stat_row(ui, "Std Dev:", fmt2(hr.std_dev));
    stat_row(ui, "Min:", fmt2(hr.min));
    stat_row(ui, "Max:", fmt2(hr.max));
}

fn classes(ui: &mut Ui, report: &AnalysisReport) {
    for label in ClassLabel::ALL {
        stat_row(
            ui,
            &format!("{label}:"),
            format!("{:.1}%", report.class_shares.get(label)),
        );
    }
    stat_row(ui, "Total Records:", report.quality.total_records.to_string());
}

fn insights(ui: &mut Ui, report: &AnalysisReport) {
    let i = &report.insights;
    stat_row(ui, "Overall Avg HR:", format!("{} bpm", fmt2(i.overall_mean)));
    stat_row(ui, "Normal Avg HR:", format!("{} bpm", fmt2(i.normal_mean)));
    stat_row(ui, "HR Range:", format!("{:.0} - {:.0} bpm", i.min, i.max));
    stat_row(ui, "Variance:", fmt2(i.variance));
}

fn recommendations(ui: &mut Ui, report: &AnalysisReport) {
    let r = &report.recommendations;
    ui.label("Based on the data analysis:");
    stat_row(ui, "Dataset Size:", r.dataset_size.to_string());
    stat_row(ui, "Class Balance:", r.class_balance.to_string());
    stat_row(ui, "Data Quality:", r.data_quality.to_string());
}
