use ecg_dashboard::{Arguments, DashboardConfig, EcgDashboardApp};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let args = Arguments::build();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([720.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "ECG Dashboard",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(EcgDashboardApp::new(
                DashboardConfig::default(),
                args.path.as_deref(),
            )))
        }),
    )
}
