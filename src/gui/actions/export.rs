// src/gui/actions/export.rs
use crate::{
    file::{self, ExportOutcome},
    gui::app::App,
};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app)
    app.sync_out_path();

    let export = &app.state.options.export;
    logf!(
        "Export: Begin rows={}, cap={}, format={:?}",
        app.records.len(),
        export.max_rows,
        export.format
    );

    let status_msg = match file::export(export, &app.records) {
        Ok(ExportOutcome::Written { path, rows }) => {
            logf!("Export: OK rows={} path={}", rows, path.display());
            format!("Exported {rows} rows to {}", path.display())
        }
        Ok(ExportOutcome::NothingToExport) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
