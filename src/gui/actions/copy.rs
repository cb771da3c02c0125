// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match file::to_export_string(&app.state.options.export, &app.records) {
        Ok(txt) => {
            logf!(
                "Copy: rows={}, format={:?}",
                app.records.len().min(app.state.options.export.max_rows),
                app.state.options.export.format
            );
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
