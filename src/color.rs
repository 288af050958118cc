use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

use crate::data::model::ClassLabel;

// ---------------------------------------------------------------------------
// Dashboard palette
// ---------------------------------------------------------------------------

pub const NORMAL: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const ARRHYTHMIA: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const STRESS: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const HISTOGRAM: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0xa0, 0xae, 0xc0);
pub const WARNING: Color32 = ARRHYTHMIA;
pub const GOOD: Color32 = NORMAL;

/// Segment / card colour of each class.
pub fn class_color(label: ClassLabel) -> Color32 {
    match label {
        ClassLabel::Normal => NORMAL,
        ClassLabel::Arrhythmia => ARRHYTHMIA,
        ClassLabel::Stress => STRESS,
    }
}

/// Same hue, `amount` (0..1) darker in HSL lightness. Used for outlines.
pub fn darker(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(color.r(), color.g(), color.b()).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    let rgb: Srgb = hsl.darken(amount).into_color();
    let rgb = rgb.into_format::<u8>();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Translucent variant for filled areas.
pub fn fill(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_reduces_lightness_and_keeps_black() {
        let d = darker(NORMAL, 0.3);
        assert!(d.r() <= NORMAL.r() && d.g() < NORMAL.g() && d.b() < NORMAL.b());
        assert_eq!(darker(Color32::BLACK, 0.5), Color32::BLACK);
    }

    #[test]
    fn fill_sets_alpha() {
        assert_eq!(fill(NORMAL, 0.1).a(), 26);
        assert_eq!(fill(NORMAL, 2.0).a(), 255);
    }
}
