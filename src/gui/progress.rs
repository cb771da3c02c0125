// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use crate::{config::options::FetchMethod, progress::Progress};

/// Writes progress into the status line shared with the UI thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn attempt_done(&mut self, method: FetchMethod) {
        self.done += 1;
        self.set_status(format!("{} attempt finished ({}/{})", method.label(), self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(s!("Fetch complete"));
    }
}
