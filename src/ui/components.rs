//! Reusable UI components
//!
//! Standalone widgets used by the main view.

use crate::theme;
use eframe::egui;

/// Monospace time readout, e.g. the wall clock or the elapsed time
pub fn time_readout(ui: &mut egui::Ui, text: &str, size: f32, color: egui::Color32) -> egui::Response {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::monospace(size))
            .color(color)
            .strong(),
    )
}

/// Centered single-line entry for an "HH:MM:SS" value
pub fn time_input(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .font(egui::FontId::proportional(theme::FONT_INPUT))
            .text_color(theme::TEXT_PRIMARY)
            .background_color(theme::BG_INPUT)
            .horizontal_align(egui::Align::Center)
            .desired_width(theme::INPUT_WIDTH),
    )
}

/// Armed countdown as HH:MM:SS, or "off" when none would fire
pub fn describe_timer(timer_set: Option<u64>) -> String {
    match timer_set {
        Some(secs) if secs > 0 => {
            format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
        }
        _ => "off".to_string(),
    }
}

/// Armed alarm text as entered, or "off"
pub fn describe_alarm(alarm_time: Option<&str>) -> String {
    match alarm_time {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "off".to_string(),
    }
}

/// Dim caption showing what a Set button armed
pub fn armed_caption(ui: &mut egui::Ui, value: &str) -> egui::Response {
    ui.label(
        egui::RichText::new(value)
            .font(egui::FontId::monospace(theme::FONT_BUTTON_SMALL))
            .color(theme::TEXT_ARMED),
    )
}

/// Icon + label button. Returns true if clicked.
pub fn action_button(
    ui: &mut egui::Ui,
    icon: &str,
    label: &str,
    fill: egui::Color32,
    large: bool,
) -> bool {
    let (font_size, height) = if large {
        (theme::FONT_BUTTON, theme::BUTTON_HEIGHT_LARGE)
    } else {
        (theme::FONT_BUTTON_SMALL, theme::BUTTON_HEIGHT)
    };
    let button = theme::button(format!("{}  {}", icon, label), fill, font_size)
        .min_size(egui::vec2(0.0, height));
    let response = ui.add(button);
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}
