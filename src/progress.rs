// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/extract).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of fetch attempts planned.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one fetch attempt completes, whatever it yielded.
    fn attempt_done(&mut self, _method: crate::config::options::FetchMethod) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
