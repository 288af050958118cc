pub mod analysis;
pub mod explorer;
pub mod overview;
pub mod panels;
pub mod visualization;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;

/// Two decimals; NaN shows as "NaN".
pub(crate) fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

/// `label: value` line used by every summary card.
pub(crate) fn stat_row(ui: &mut Ui, label: &str, value: impl Into<RichText>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(label).color(color::MUTED_TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(value.into().strong());
        });
    });
}

/// Framed card with a heading.
pub(crate) fn card<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(220.0);
            ui.strong(title);
            ui.separator();
            add_contents(ui)
        })
        .inner
}

/// Big number with a caption and an accent colour.
pub(crate) fn metric_card(ui: &mut Ui, caption: &str, value: usize, accent: Color32) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(140.0);
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(caption).color(color::MUTED_TEXT));
                ui.label(RichText::new(value.to_string()).size(28.0).color(accent).strong());
            });
        });
}

/// Shown by every section until a file is loaded.
pub(crate) fn empty_hint(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a CSV file to explore it  (File → Open…)");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt2_keeps_nan_visible() {
        assert_eq!(fmt2(75.0), "75.00");
        assert_eq!(fmt2(11.180339), "11.18");
        assert_eq!(fmt2(f64::NAN), "NaN");
    }
}
