// src/gui/actions/clear.rs
use crate::gui::app::App;

pub fn clear(app: &mut App) {
    app.controller.clear_data();
    app.state.gui.last_export = None;
    if !app.running {
        app.status("Cleared");
    }
}
