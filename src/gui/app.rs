// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex, PoisonError},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    record::FormattedRecord,
    scrape::ScrapeOutcome,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Quote Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// What the fetch thread sends back.
pub type FetchResult = crate::Result<ScrapeOutcome>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // formatted rows of the last successful fetch, uncapped
    pub records: Vec<FormattedRecord>,

    // status/progress (fetch thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<FetchResult>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        if state.gui.source_text.is_empty() {
            if let Some(src) = &state.options.source.source {
                state.gui.source_text = src.to_string();
            }
        }

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: source={}, out={}", state.gui.source_text, out_path_text);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Commit the output text field into ExportOptions, if the user typed.
    pub fn sync_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("UI: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::gui::actions::poll_fetch(self);

        eframe::egui::SidePanel::left("source")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                crate::gui::components::source_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_buttons::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
