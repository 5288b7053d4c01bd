// src/gui/components/status_panel.rs
//
// Loading indicator (spinner, text, progress bar) and the error banner.

use eframe::egui::{self, Color32, RichText};
use crate::gui::app::App;

const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let views = app.controller.views();

    if views.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(views.loading_text.as_str());
        });
        ui.add(
            egui::ProgressBar::new(f32::from(views.progress_pct) / 100.0)
                .show_percentage()
                .desired_width(320.0),
        );
        // keep polling the worker channel while the spinner is up
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
    }

    if let Some(err) = &views.error {
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, ERROR_RED))
            .show(ui, |ui| {
                ui.label(RichText::new(err).color(ERROR_RED));
            });
    }
}
