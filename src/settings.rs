//! User settings stored as settings.json in the app data directory
//!
//! Only UI preferences live here. Stopwatch, timer and alarm state always
//! start fresh.

use crate::constants::{DEFAULT_ALARM_TEXT, DEFAULT_TIMER_TEXT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Initial input contents
    pub default_timer: String,
    pub default_alarm: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            default_timer: DEFAULT_TIMER_TEXT.to_string(),
            default_alarm: DEFAULT_ALARM_TEXT.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn window_pos(&self) -> Option<egui::Pos2> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some(egui::pos2(x, y)),
            _ => None,
        }
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some(egui::vec2(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_timer, "00:00:10");
        assert_eq!(settings.default_alarm, "12:00:00");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(520.0),
            window_h: Some(640.0),
            default_timer: "00:25:00".to_string(),
            default_alarm: "07:30:00".to_string(),
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"default_alarm":"06:00:00"}"#)
            .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.default_alarm, "06:00:00");
        assert_eq!(settings.default_timer, "00:00:10");
        assert_eq!(settings.window_pos(), None);
    }

    #[test]
    fn geometry_needs_both_coordinates() {
        let settings = Settings {
            window_x: Some(5.0),
            window_w: Some(500.0),
            window_h: Some(600.0),
            ..Settings::default()
        };
        assert_eq!(settings.window_pos(), None);
        assert_eq!(settings.window_size(), Some(egui::vec2(500.0, 600.0)));
    }
}
