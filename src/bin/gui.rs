// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use defcon_courses::{
    config::{consts::APP_TITLE, state::GuiState},
    gui,
    log::{self, LogTarget},
};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init(LogTarget::default()) {
        eprintln!("Logging disabled: {e}");
    }

    let win = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([win.window_w as f32, win.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
