// src/gui/actions/export.rs
use crate::gui::app::App;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = match app.controller.export_to_csv(&app.state.options.export) {
        Ok(Some(path)) => {
            let msg = format!("Exported {} courses → {}", app.controller.courses().len(), path.display());
            app.state.gui.last_export = Some(path);
            msg
        }
        Ok(None) => s!("Nothing to export"),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
