// src/progress.rs
/// Progress reporting for the fetch.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when the request is about to go out.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Completion in percent (0..=100). The fetch is a single request, so
    /// only 0 and 100 are ever reported.
    fn percent(&mut self, _pct: u8) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
