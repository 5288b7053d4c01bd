// src/gui/components/stats_panel.rs

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.controller.views().stats {
        return;
    }
    let Some(stats) = app.controller.stats() else { return };

    ui.horizontal(|ui| {
        stat_box(ui, "Total Courses", &stats.total.to_string());
        stat_box(ui, "Average Cost", &stats.average_cost_label());
        stat_box(ui, "Date Range", &stats.date_range);
    });
}

fn stat_box(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).heading().strong());
            ui.label(RichText::new(label).weak());
        });
    });
}
