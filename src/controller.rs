//! Stopwatch, countdown and alarm state
//!
//! `Controller` owns every piece of mutable timer state. It holds no GUI
//! types: callers pass the current `Instant` (and wall clock time for the
//! alarm), which keeps each operation deterministic and testable.

use crate::constants::ZERO_ELAPSED_TEXT;
use crate::types::AlertColor;
use crate::utils::{format_clock, format_elapsed, parse_duration};
use chrono::NaiveTime;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Controller {
    /// Start of the current run, `Some` while running
    started_at: Option<Instant>,
    /// Elapsed time folded in by previous runs
    accumulated: Duration,
    elapsed_text: String,
    clock_text: String,
    timer_set: Option<u64>,
    alarm_time: Option<String>,
    blinking: bool,
    alert_color: Option<AlertColor>,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            started_at: None,
            accumulated: Duration::ZERO,
            elapsed_text: ZERO_ELAPSED_TEXT.to_string(),
            clock_text: String::new(),
            timer_set: None,
            alarm_time: None,
            blinking: false,
            alert_color: None,
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    pub fn elapsed_text(&self) -> &str {
        &self.elapsed_text
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    /// Countdown threshold in whole seconds
    pub fn timer_set(&self) -> Option<u64> {
        self.timer_set
    }

    pub fn alarm_time(&self) -> Option<&str> {
        self.alarm_time.as_deref()
    }

    /// `None` until the first alert, and again after a reset
    pub fn alert_color(&self) -> Option<AlertColor> {
        self.alert_color
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// Resume counting from the frozen elapsed value. No-op while running.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_some() {
            return;
        }
        self.started_at = Some(now);
        debug!(resumed_from_ms = self.accumulated.as_millis() as u64, "Stopwatch started");
    }

    pub fn stop(&mut self, now: Instant) {
        if let Some(start) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(start);
            debug!(elapsed_ms = self.accumulated.as_millis() as u64, "Stopwatch stopped");
        }
    }

    /// Zero the stopwatch and clear the alert. Timer and alarm settings stay.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.blinking = false;
        self.alert_color = None;
        self.elapsed_text = ZERO_ELAPSED_TEXT.to_string();
        debug!("Stopwatch reset");
    }

    /// Parse "H:M:S" into the countdown threshold. Malformed input clears it.
    pub fn set_timer(&mut self, text: &str) {
        self.timer_set = parse_duration(text).ok();
        if let Some(secs) = self.timer_set {
            debug!(seconds = secs, "Countdown threshold set");
        }
    }

    /// Stored verbatim; anything that never equals a formatted clock simply never fires.
    pub fn set_alarm(&mut self, text: &str) {
        self.alarm_time = Some(text.to_string());
        debug!(alarm = %text, "Alarm set");
    }

    // ------------------------------------------------------------------
    // Scheduled callbacks
    // ------------------------------------------------------------------

    /// Refresh the elapsed label and enforce the countdown threshold.
    pub fn display_tick(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        let elapsed = self.elapsed(now);
        self.elapsed_text = format_elapsed(elapsed);

        // Zero counts as unset
        if let Some(secs) = self.timer_set.filter(|&s| s > 0) {
            if elapsed >= Duration::from_secs(secs) {
                info!(threshold_secs = secs, "Countdown expired");
                self.stop(now);
                self.trigger_alert();
            }
        }
    }

    /// Refresh the clock label and fire the alarm on an exact match.
    pub fn clock_tick(&mut self, wall: NaiveTime) {
        self.clock_text = format_clock(wall);

        let matched = self
            .alarm_time
            .as_deref()
            .is_some_and(|alarm| !alarm.is_empty() && alarm == self.clock_text);
        if matched {
            info!(time = %self.clock_text, "Alarm reached");
            self.trigger_alert();
        }
    }

    /// Start blinking with an immediate first toggle. An alert that is
    /// already blinking keeps its current cadence.
    pub fn trigger_alert(&mut self) {
        if self.blinking {
            return;
        }
        self.blinking = true;
        self.blink();
    }

    /// Flip the alert background. Returns whether blinking is still active,
    /// i.e. whether the blink task should be re-armed.
    pub fn blink(&mut self) -> bool {
        if !self.blinking {
            return false;
        }
        let next = self
            .alert_color
            .unwrap_or(AlertColor::Neutral)
            .toggled();
        self.alert_color = Some(next);
        true
    }
}
