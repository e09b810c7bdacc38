//! Button handlers

use super::App;
use std::time::Instant;
use tracing::debug;

impl App {
    pub fn on_set_timer(&mut self) {
        self.controller.set_timer(&self.timer_input);
    }

    pub fn on_set_alarm(&mut self) {
        self.controller.set_alarm(&self.alarm_input);
    }

    pub fn on_start(&mut self) {
        self.controller.start(Instant::now());
    }

    pub fn on_stop(&mut self) {
        self.controller.stop(Instant::now());
    }

    pub fn on_reset(&mut self) {
        if self.controller.is_blinking() {
            debug!("Alert dismissed by reset");
        }
        self.controller.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn app() -> App {
        App::with_settings(Settings::default(), PathBuf::from("."), Instant::now())
    }

    #[test]
    fn set_buttons_read_the_entries() {
        let mut app = app();
        app.on_set_timer();
        app.on_set_alarm();
        assert_eq!(app.controller.timer_set(), Some(10));
        assert_eq!(app.controller.alarm_time(), Some("12:00:00"));

        app.timer_input = "ten seconds".to_string();
        app.on_set_timer();
        assert_eq!(app.controller.timer_set(), None);
    }

    #[test]
    fn long_alarm_entry_is_stored_whole() {
        let mut app = app();
        app.alarm_input = "12:00:00 tomorrow, after lunch".to_string();
        app.on_set_alarm();
        assert_eq!(
            app.controller.alarm_time(),
            Some("12:00:00 tomorrow, after lunch")
        );
    }

    #[test]
    fn start_stop_reset_drive_the_controller() {
        let mut app = app();
        app.on_start();
        assert!(app.controller.is_running());
        app.on_stop();
        assert!(!app.controller.is_running());

        app.controller.trigger_alert();
        app.on_reset();
        assert!(!app.controller.is_blinking());
        assert_eq!(app.controller.elapsed_text(), "00:00:00.000");
    }
}
