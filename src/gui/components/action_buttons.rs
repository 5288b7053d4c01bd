// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let views = app.controller.views();
    let ctx = ui.ctx().clone();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.heading("DEF CON Training Courses");
        ui.separator();
        ui.label(egui::RichText::new(app.state.options.fetch.endpoint()).monospace().weak());
    });

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Fetch / Export / Clear) ---
    ui.horizontal(|ui| {
        let fetch_btn = ui.add_enabled(!app.running, egui::Button::new("Fetch Courses"));
        if fetch_btn.clicked() {
            actions::scrape(app, &ctx);
        }

        let export_btn = ui
            .add_enabled(views.export_enabled, egui::Button::new("Export CSV"))
            .on_disabled_hover_text("Fetch courses first");
        if export_btn.clicked() {
            actions::export(app);
        }

        if ui.button("Clear").clicked() {
            actions::clear(app);
        }

        if let Some(p) = &app.state.gui.last_export {
            ui.label(egui::RichText::new(format!("Last export: {}", p.display())).weak());
        }
    });
    ui.add_space(4.0);
}
