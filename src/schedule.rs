//! Recurring tasks polled from the frame loop
//!
//! egui has no `after(ms, callback)`, so each recurring task is a
//! `Repeating` deadline that the app checks once per frame. The `Scheduler`
//! hands the controller to whichever tasks are due and then reports the
//! next deadline so the app can request a repaint for exactly that moment.

use crate::constants::{BLINK_INTERVAL, CLOCK_TICK_INTERVAL, DISPLAY_REFRESH_INTERVAL};
use crate::controller::Controller;
use crate::types::TaskKind;
use chrono::NaiveTime;
use std::time::{Duration, Instant};
use tracing::trace;

/// A re-armable deadline. Disarmed until `arm` or `arm_now` is called.
#[derive(Debug, Clone)]
pub struct Repeating {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Repeating {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Due one interval from `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Due on the next poll
    pub fn arm_now(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.next_due, Some(due) if now >= due)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

pub struct Scheduler {
    display: Repeating,
    clock: Repeating,
    blink: Repeating,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            display: Repeating::new(DISPLAY_REFRESH_INTERVAL),
            clock: Repeating::new(CLOCK_TICK_INTERVAL),
            blink: Repeating::new(BLINK_INTERVAL),
        }
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both ticks fire on the first poll so the labels are filled immediately.
    pub fn start(&mut self, now: Instant) {
        self.display.arm_now(now);
        self.clock.arm_now(now);
    }

    /// Run every due task once, in display, clock, blink order. A task that
    /// fell behind re-arms from `now` rather than catching up.
    pub fn run_due(
        &mut self,
        now: Instant,
        wall: NaiveTime,
        controller: &mut Controller,
    ) -> Vec<TaskKind> {
        let mut ran = Vec::new();

        if self.display.is_due(now) {
            controller.display_tick(now);
            self.display.arm(now);
            ran.push(TaskKind::DisplayRefresh);
        }

        if self.clock.is_due(now) {
            controller.clock_tick(wall);
            self.clock.arm(now);
            ran.push(TaskKind::ClockTick);
        }

        if self.blink.is_due(now) {
            if controller.blink() {
                trace!(color = ?controller.alert_color(), "Alert toggled");
                self.blink.arm(now);
            } else {
                self.blink.cancel();
            }
            ran.push(TaskKind::Blink);
        }

        // An alert raised by a tick above already made its first toggle
        if controller.is_blinking() && !self.blink.is_armed() {
            self.blink.arm(now);
        }

        ran
    }

    /// Earliest deadline worth waking for. The display tick stays armed but
    /// has nothing to refresh while the stopwatch is stopped, so it only
    /// counts while running.
    pub fn next_deadline(&self, controller: &Controller) -> Option<Instant> {
        let display = controller.is_running().then_some(&self.display);
        display
            .into_iter()
            .chain([&self.clock, &self.blink])
            .filter_map(Repeating::next_due)
            .min()
    }

    #[cfg(test)]
    pub fn is_armed(&self, task: TaskKind) -> bool {
        match task {
            TaskKind::DisplayRefresh => self.display.is_armed(),
            TaskKind::ClockTick => self.clock.is_armed(),
            TaskKind::Blink => self.blink.is_armed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlertColor;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn repeating_is_disarmed_until_armed() {
        let t0 = Instant::now();
        let mut r = Repeating::new(ms(100));
        assert!(!r.is_armed());
        assert!(!r.is_due(t0 + ms(1_000)));

        r.arm(t0);
        assert!(!r.is_due(t0 + ms(99)));
        assert!(r.is_due(t0 + ms(100)));
        assert_eq!(r.next_due(), Some(t0 + ms(100)));

        r.cancel();
        assert!(!r.is_due(t0 + ms(200)));
    }

    #[test]
    fn start_runs_both_ticks_on_first_poll() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        assert_eq!(s.next_deadline(&c), None);

        s.start(t0);
        let ran = s.run_due(t0, hms(8, 30, 0), &mut c);
        assert_eq!(ran, vec![TaskKind::DisplayRefresh, TaskKind::ClockTick]);
        assert_eq!(c.clock_text(), "08:30:00");
    }

    #[test]
    fn ticks_rearm_at_their_own_intervals() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        s.start(t0);
        s.run_due(t0, hms(8, 30, 0), &mut c);

        c.start(t0);
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(10)));
        let ran = s.run_due(t0 + ms(10), hms(8, 30, 0), &mut c);
        assert_eq!(ran, vec![TaskKind::DisplayRefresh]);

        let ran = s.run_due(t0 + ms(1_000), hms(8, 30, 1), &mut c);
        assert_eq!(ran, vec![TaskKind::DisplayRefresh, TaskKind::ClockTick]);
        assert_eq!(c.clock_text(), "08:30:01");
    }

    #[test]
    fn idle_stopwatch_wakes_only_for_clock() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        s.start(t0);
        s.run_due(t0, hms(8, 30, 0), &mut c);

        assert!(s.is_armed(TaskKind::DisplayRefresh));
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(1_000)));

        c.start(t0 + ms(200));
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(10)));

        c.stop(t0 + ms(300));
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(1_000)));
    }

    #[test]
    fn late_poll_runs_each_task_once() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        s.start(t0);
        s.run_due(t0, hms(8, 30, 0), &mut c);

        let ran = s.run_due(t0 + ms(5_000), hms(8, 30, 5), &mut c);
        assert_eq!(ran, vec![TaskKind::DisplayRefresh, TaskKind::ClockTick]);
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(6_000)));
        assert!(s.is_armed(TaskKind::DisplayRefresh));
    }

    #[test]
    fn running_stopwatch_updates_on_display_tick() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        s.start(t0);
        c.start(t0);
        s.run_due(t0 + ms(1_500), hms(9, 0, 0), &mut c);
        assert_eq!(c.elapsed_text(), "00:00:01.500");
    }

    #[test]
    fn countdown_alert_fires_within_one_display_tick() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        c.set_timer("0:0:1");
        s.start(t0);
        c.start(t0);

        s.run_due(t0 + ms(990), hms(9, 0, 0), &mut c);
        assert!(c.is_running());
        s.run_due(t0 + ms(1_000), hms(9, 0, 1), &mut c);
        assert!(!c.is_running());
        assert!(c.is_blinking());
        assert!(s.is_armed(TaskKind::Blink));
    }

    #[test]
    fn alarm_blinks_until_reset_then_stops_rearming() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        c.set_alarm("12:00:00");
        s.start(t0);

        s.run_due(t0, hms(12, 0, 0), &mut c);
        assert_eq!(c.alert_color(), Some(AlertColor::Red));
        assert_eq!(s.next_deadline(&c), Some(t0 + ms(500)));

        let ran = s.run_due(t0 + ms(500), hms(12, 0, 0), &mut c);
        assert!(ran.contains(&TaskKind::Blink));
        assert_eq!(c.alert_color(), Some(AlertColor::Neutral));

        s.run_due(t0 + ms(1_000), hms(12, 0, 1), &mut c);
        assert_eq!(c.alert_color(), Some(AlertColor::Red));

        c.reset();
        let ran = s.run_due(t0 + ms(1_500), hms(12, 0, 1), &mut c);
        assert!(ran.contains(&TaskKind::Blink));
        assert_eq!(c.alert_color(), None);
        assert!(!s.is_armed(TaskKind::Blink));

        let ran = s.run_due(t0 + ms(2_000), hms(12, 0, 2), &mut c);
        assert!(!ran.contains(&TaskKind::Blink));
    }

    #[test]
    fn second_alert_keeps_single_blink_cadence() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let mut c = Controller::new();
        c.set_alarm("12:00:00");
        c.set_timer("0:0:1");
        s.start(t0);
        c.start(t0);

        s.run_due(t0 + ms(1_000), hms(11, 59, 59), &mut c);
        assert!(c.is_blinking());
        let first_blink = t0 + ms(1_500);

        // Alarm lands while the countdown alert is already blinking
        c.clock_tick(hms(12, 0, 0));
        assert_eq!(c.alert_color(), Some(AlertColor::Red));
        assert!(!s.run_due(t0 + ms(1_499), hms(12, 0, 0), &mut c).contains(&TaskKind::Blink));
        assert!(s.run_due(first_blink, hms(12, 0, 0), &mut c).contains(&TaskKind::Blink));
        assert_eq!(c.alert_color(), Some(AlertColor::Neutral));
    }
}
