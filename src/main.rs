mod app;
mod config;
mod quiz;
mod session;
mod ui;

use app::QuizApp;
use eframe::egui;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), eframe::Error> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("Failed to initialize logger: {}", e));

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(600.0, 800.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Quiz",
        options,
        Box::new(|cc| {
            // Set dark mode
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(QuizApp::new(cc))
        }),
    )
}
