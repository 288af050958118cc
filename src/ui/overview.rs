use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Pos2, RichText, Sense, Shape, Stroke, Ui};

use super::{card, empty_hint, metric_card, stat_row};
use crate::charts::PieChart;
use crate::color;
use crate::data::model::ClassLabel;
use crate::data::stats::DataQuality;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Overview section
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        empty_hint(ui);
        return;
    };

    ui.horizontal_wrapped(|ui: &mut Ui| {
        metric_card(ui, "Total Records", report.quality.total_records, color::MUTED_TEXT);
        for label in ClassLabel::ALL {
            metric_card(
                ui,
                &label.to_string(),
                report.class_counts.get(label),
                color::class_color(label),
            );
        }
    });

    ui.add_space(12.0);

    ui.horizontal_top(|ui: &mut Ui| {
        card(ui, "Class Distribution", |ui: &mut Ui| match state.charts.pie.get() {
            Some(pie) => pie_chart(ui, pie),
            None => {
                ui.label("No chart");
            }
        });
        card(ui, "Data Quality", |ui: &mut Ui| quality_panel(ui, &report.quality));
    });
}

fn quality_panel(ui: &mut Ui, quality: &DataQuality) {
    let flag = |n: usize| {
        let c = if n == 0 { color::GOOD } else { color::WARNING };
        RichText::new(n.to_string()).color(c)
    };
    stat_row(ui, "Total Records", RichText::new(quality.total_records.to_string()).color(color::GOOD));
    stat_row(ui, "Missing Values", flag(quality.missing_values));
    stat_row(ui, "Duplicate Rows", flag(quality.duplicate_rows));
    stat_row(ui, "Columns", RichText::new(quality.columns.to_string()).color(color::GOOD));
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Segments start at 12 o'clock and run clockwise.
fn pie_chart(ui: &mut Ui, pie: &PieChart) {
    let fractions = pie.fractions();
    if fractions.is_empty() {
        ui.label("No rows match a known class.");
        return;
    }

    let size = ui.available_width().clamp(160.0, 260.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = size * 0.45;
    let at = |angle: f32| Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());

    let mut start = -FRAC_PI_2;
    let mut hovered: Option<(ClassLabel, f64)> = None;
    let hover_angle = response.hover_pos().and_then(|p| {
        let d = p - center;
        (d.length() <= radius).then(|| (d.y.atan2(d.x) + FRAC_PI_2).rem_euclid(TAU))
    });

    for (label, fraction) in fractions {
        let sweep = fraction as f32 * TAU;
        // Triangle fan keeps every filled shape convex.
        let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        let fill = color::class_color(label);
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(vec![center, at(a0), at(a1)], fill, Stroke::NONE));
        }
        if sweep > 0.0 && sweep < TAU {
            painter.line_segment([center, at(start)], Stroke::new(1.5, color::darker(fill, 0.4)));
        }

        let rel_start = start + FRAC_PI_2;
        if let Some(a) = hover_angle {
            if a >= rel_start && a < rel_start + sweep {
                hovered = Some((label, fraction));
            }
        }
        start += sweep;
    }

    if let Some((label, fraction)) = hovered {
        response.on_hover_text(format!("{label}: {:.1}%", fraction * 100.0));
    }

    ui.horizontal(|ui: &mut Ui| {
        for (label, count) in &pie.segments {
            ui.label(RichText::new("■").color(color::class_color(*label)));
            ui.label(format!("{label} ({count})"));
        }
    });
}
