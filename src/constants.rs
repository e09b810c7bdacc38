//! Application constants and configuration

use std::time::Duration;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_TITLE: &str = "Stopwatch & Alarm";
/// Folder under the local data dir holding settings.json and logs
pub const DATA_DIR_NAME: &str = "Stopwatch Alarm";

/// Elapsed label refresh and countdown check
pub const DISPLAY_REFRESH_INTERVAL: Duration = Duration::from_millis(10);
/// Wall clock label refresh and alarm check
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_millis(1000);
/// Alert background toggle
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_TIMER_TEXT: &str = "00:00:10";
pub const DEFAULT_ALARM_TEXT: &str = "12:00:00";
pub const ZERO_ELAPSED_TEXT: &str = "00:00:00.000";

pub const WINDOW_SIZE: (f32, f32) = (500.0, 600.0);
pub const WINDOW_MIN_SIZE: (f32, f32) = (420.0, 520.0);
