//! App module - contains the main application state and logic

mod controls;
mod ticks;
mod views;

use crate::controller::Controller;
use crate::schedule::Scheduler;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: Controller,
    pub(crate) scheduler: Scheduler,
    // Entry contents
    pub(crate) timer_input: String,
    pub(crate) alarm_input: String,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for headings and buttons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir, Instant::now())
    }

    /// State without a GUI context; both ticks fire on the first frame.
    pub(crate) fn with_settings(settings: Settings, data_dir: PathBuf, now: Instant) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.start(now);

        Self {
            controller: Controller::new(),
            scheduler,
            timer_input: settings.default_timer.clone(),
            alarm_input: settings.default_alarm.clone(),
            window_pos: None,
            window_size: None,
            needs_center: settings.window_pos().is_none(),
            settings,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
