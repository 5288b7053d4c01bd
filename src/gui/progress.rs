// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use eframe::egui;
use crate::progress::Progress;

/// Runs on the fetch worker: mirrors progress into the shared status line
/// and wakes the UI so it repaints.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self) {
        // the result travels over the channel; just make sure it gets polled
        self.ctx.request_repaint();
    }
}
