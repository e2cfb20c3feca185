#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use figure_editor::{EditorConfig, FigureApp};

const CONFIG_PATH: &str = "figure_editor.json";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match EditorConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            log::info!("Using default settings ({})", err);
            EditorConfig::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Figure Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(FigureApp::new(cc, config)))),
    )
}
