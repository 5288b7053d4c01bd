// src/gui/components/data_table.rs
//
// Draws the course table from the controller's rows. Purely a view.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{
    course::{Difficulty, Field},
    gui::app::App,
    render::{self, TableRow},
};

const COLUMN_WIDTHS: [f32; 7] = [260.0, 180.0, 140.0, 120.0, 160.0, 80.0, 120.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.controller.views().table {
        return;
    }
    let rows = app.controller.rows();

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("course_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            inner_table(ui, rows);
        });
}

fn inner_table(ui: &mut egui::Ui, rows: &[TableRow]) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("course_table");
    for w in COLUMN_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for field in Field::ALL {
                header.col(|ui| {
                    ui.strong(field.header());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for field in Field::ALL {
                    let text = data.cell(field);
                    row.col(|ui| {
                        ui.scope(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(styled(field, text, data.difficulty));
                            });
                        });
                    });
                }
            });
        });
}

/// Per-column look, keyed by the same classes the HTML fragment uses.
fn styled(field: Field, text: &str, difficulty: Difficulty) -> RichText {
    let rt = RichText::new(text);
    if field == Field::Difficulty {
        return rt.color(difficulty_color(difficulty)).strong();
    }
    match render::cell_class(field) {
        Some("course-name") => rt.strong(),
        Some("trainer")     => rt.italics(),
        Some("cost")        => rt.monospace(),
        _ => rt,
    }
}

fn difficulty_color(d: Difficulty) -> Color32 {
    match d {
        Difficulty::Beginner     => Color32::from_rgb(0x4C, 0xAF, 0x50),
        Difficulty::Intermediate => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        Difficulty::Advanced     => Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}
