//! Numerush desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Numerush application.

use numerush_app::NumerushApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.numerush.numerush";

    better_panic::install();
    env_logger::init();

    log::info!("starting numerush {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((450.0, 580.0))
            .with_min_inner_size((360.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Numerush",
        options,
        Box::new(|cc| Ok(Box::new(NumerushApp::new(cc)))),
    )
}
