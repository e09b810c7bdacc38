//! Per-frame polling of the recurring tasks

use super::App;
use chrono::Local;
use eframe::egui;
use std::time::Instant;
use tracing::trace;

impl App {
    /// Run whichever tasks are due.
    pub fn poll_ticks(&mut self) {
        let ran = self
            .scheduler
            .run_due(Instant::now(), Local::now().time(), &mut self.controller);
        if !ran.is_empty() {
            trace!(tasks = ?ran, "Ran due tasks");
        }
    }

    /// Ask egui to wake us for the next deadline. Called after rendering so a
    /// Start clicked this frame already counts as running.
    pub fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(deadline) = self.scheduler.next_deadline(&self.controller) {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
