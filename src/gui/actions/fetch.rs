// src/gui/actions/fetch.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::options::Source,
    format,
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Start a fetch on a background thread. One at a time.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let Some(source) = Source::parse(&app.state.gui.source_text) else {
        app.status("Enter a file path or an http(s) URL");
        logd!("Fetch: Clicked, but the source field is empty");
        return;
    };
    app.state.options.source.source = Some(source);

    let opts = app.state.options.source.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!(
        "Fetch: Begin source={} method={}",
        app.state.gui.source_text,
        opts.method.label()
    );

    app.status("Fetching…");

    // → This is where the fetch happens ←
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = scrape::run(&opts, Some(&mut prog));
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    app.running = true;
    app.pending = Some(rx);
}

/// Pick up a finished fetch, if any. Called every frame.
pub fn poll_fetch(app: &mut App) {
    let Some(rx) = &app.pending else { return };

    let result = match rx.try_recv() {
        Ok(r) => r,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Fetch: worker ended without a result");
            app.pending = None;
            app.running = false;
            app.status("Error: fetch thread stopped unexpectedly");
            return;
        }
    };
    app.pending = None;
    app.running = false;

    match result {
        Ok(outcome) => {
            let ex = outcome.extraction;
            app.records = format::format_records(&ex.records);

            logf!(
                "Fetch: OK origin={}, records={}, skipped={}",
                outcome.origin.label(),
                app.records.len(),
                ex.warnings.len()
            );

            let msg = if app.records.is_empty() {
                format!("No records found ({} data rows on the page)", ex.rows_seen)
            } else if ex.warnings.is_empty() {
                format!("Ready: {} records via {}", app.records.len(), outcome.origin.label())
            } else {
                format!(
                    "Ready: {} records via {} ({} rows skipped, see log)",
                    app.records.len(),
                    outcome.origin.label(),
                    ex.warnings.len()
                )
            };
            app.status(msg);
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
