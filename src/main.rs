use blackbody_viewer::app::BlackbodyApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blackbody Radiation Viewer",
        options,
        Box::new(|cc| {
            // Black curves need a light background.
            cc.egui_ctx.set_theme(egui::Theme::Light);
            Ok(Box::new(BlackbodyApp::new()?))
        }),
    )
}
