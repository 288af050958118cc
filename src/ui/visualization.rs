use eframe::egui::Ui;
use egui_plot::{Bar, BarChart as PlotBarChart, Legend, Line, Plot, PlotPoints, Points};

use super::{card, empty_hint};
use crate::charts::{BarChart, ChartSlot, LineChart, ScatterChart};
use crate::color;
use crate::state::AppState;

const PLOT_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Visualization section
// ---------------------------------------------------------------------------

pub fn visualization(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        empty_hint(ui);
        return;
    }
    let hr_name = state
        .roles
        .heart_rate
        .as_ref()
        .map_or("Heart Rate", |c| c.name.as_str());

    card(ui, "Heart Rate Distribution", |ui: &mut Ui| {
        histogram(ui, &state.charts.bar);
    });
    ui.add_space(8.0);
    card(ui, "Heart Rate Trend", |ui: &mut Ui| {
        trend(ui, &state.charts.line, hr_name);
    });
    ui.add_space(8.0);
    card(ui, "Heart Rate vs QRS Duration", |ui: &mut Ui| {
        scatter(ui, &state.charts.scatter);
    });
}

fn histogram(ui: &mut Ui, slot: &ChartSlot<BarChart>) {
    let Some(chart) = slot.get() else {
        return;
    };
    let labels: Vec<String> = chart.buckets.iter().map(|(l, _)| l.clone()).collect();
    let bars: Vec<Bar> = chart
        .buckets
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .name(label)
                .fill(color::HISTOGRAM)
        })
        .collect();

    Plot::new(slot.plot_id())
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                PlotBarChart::new(bars)
                    .name("Count")
                    .color(color::HISTOGRAM),
            );
        });
}

fn trend(ui: &mut Ui, slot: &ChartSlot<LineChart>, hr_name: &str) {
    let Some(chart) = slot.get() else {
        return;
    };
    Plot::new(slot.plot_id())
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Row")
        .y_axis_label(hr_name)
        .show(ui, |plot_ui| {
            for run in chart.runs() {
                plot_ui.line(
                    Line::new(PlotPoints::from(run))
                        .name("Heart Rate")
                        .color(color::NORMAL)
                        .width(2.0),
                );
            }
        });
}

fn scatter(ui: &mut Ui, slot: &ChartSlot<ScatterChart>) {
    let Some(chart) = slot.get() else {
        return;
    };
    if chart.points.is_empty() {
        ui.label("No rows with both a heart rate and a QRS duration.");
        return;
    }
    Plot::new(slot.plot_id())
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Heart Rate")
        .y_axis_label("QRS Duration")
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(chart.points.clone()))
                    .name("HR vs QRS")
                    .color(color::ARRHYTHMIA)
                    .radius(3.0),
            );
        });
}
