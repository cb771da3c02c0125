// src/gui/components/source_panel.rs
//
// Left panel: where to read from, how to fetch it, and the FETCH button.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::options::FetchMethod,
    core::browser,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Source");
    ui.add_space(4.0);

    ui.label("File path or URL:");
    if ui
        .add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .hint_text("page.html or https://…")
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        logd!("UI: source_text → {}", app.state.gui.source_text);
    }

    ui.add_space(6.0);

    // Only relevant for URLs; files are read directly
    let method = &mut app.state.options.source.method;
    let before = *method;
    ui.horizontal(|ui| {
        ui.label("Fetch:");
        ui.selectable_value(method, FetchMethod::Auto, FetchMethod::Auto.label());
        ui.selectable_value(method, FetchMethod::Http, FetchMethod::Http.label());
        ui.add_enabled_ui(browser::available(), |ui| {
            ui.selectable_value(method, FetchMethod::Browser, FetchMethod::Browser.label())
                .on_disabled_hover_text("Built without the `browser` feature");
        });
    });
    if *method != before {
        logf!("UI: Fetch method → {}", method.label());
    }

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_fetch = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("FETCH").color(black).strong()).fill(red),
        );
        if button_fetch.clicked() {
            actions::fetch(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui.label(format!("Records: {}", app.records.len()));
    let cap = app.state.options.export.max_rows;
    if app.records.len() > cap {
        ui.weak(format!("Export keeps the first {cap}"));
    }
}
