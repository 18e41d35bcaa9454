#![deny(missing_docs)]

//! Entry point for the fraudcheck desktop client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use fraudcheck::config::{self, AppConfig};
use fraudcheck::egui_app::controller::EguiController;
use fraudcheck::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use fraudcheck::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load config; using defaults");
        AppConfig::default()
    });
    let controller = EguiController::from_config(&config);

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([960.0, 760.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fraud Check",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}
