//! Centralized theme constants for Stopwatch & Alarm
//! All colors, sizes, and styling should reference these constants

use crate::types::AlertColor;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x1e); // neutral root surface
pub const BG_READOUT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33); // elapsed label panel
pub const BG_INPUT: Color32 = Color32::from_rgb(0x22, 0x22, 0x22); // entry background
pub const BG_ALERT: Color32 = Color32::from_rgb(0xff, 0x00, 0x00); // blink red

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0xff, 0xcc, 0x00); // amber
pub const TEXT_CLOCK: Color32 = Color32::from_rgb(0x00, 0xff, 0xff); // cyan
pub const TEXT_ELAPSED: Color32 = Color32::from_rgb(0x00, 0xff, 0x00); // green
pub const TEXT_ARMED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_STRONG: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_TIMER: Color32 = Color32::from_rgb(0xff, 0x88, 0x00); // orange
pub const BTN_ALARM: Color32 = Color32::from_rgb(0xff, 0x00, 0x00); // red
pub const BTN_START: Color32 = Color32::from_rgb(0x00, 0xaa, 0x00); // green
pub const BTN_STOP: Color32 = Color32::from_rgb(0xaa, 0x00, 0x00); // dark red
pub const BTN_RESET: Color32 = Color32::from_rgb(0x55, 0x55, 0xff); // blue

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_ELAPSED: f32 = 44.0;
pub const FONT_CLOCK: f32 = 26.0;
pub const FONT_HEADING: f32 = 22.0;
pub const FONT_INPUT: f32 = 16.0;
pub const FONT_BUTTON: f32 = 14.0;
pub const FONT_BUTTON_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const INPUT_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;

// =============================================================================
// CORNER RADIUS / STROKE
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 3.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 5.0;
pub const SPACING_MD: f32 = 10.0;
pub const SPACING_LG: f32 = 20.0;

// =============================================================================
// HELPER - Alert palette
// =============================================================================

pub fn alert_fill(color: AlertColor) -> Color32 {
    match color {
        AlertColor::Neutral => BG_BASE,
        AlertColor::Red => BG_ALERT,
    }
}

/// Root surface fill. Until an alert is shown this is the neutral base.
pub fn root_fill(alert: Option<AlertColor>) -> Color32 {
    alert.map_or(BG_BASE, alert_fill)
}

/// Clock label fill
pub fn clock_fill(alert: Option<AlertColor>) -> Color32 {
    alert.map_or(BG_BASE, alert_fill)
}

/// Elapsed label fill. Keeps its own gray panel outside of alerts.
pub fn readout_fill(alert: Option<AlertColor>) -> Color32 {
    alert.map_or(BG_READOUT, alert_fill)
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_BASE,
        extreme_bg_color: BG_INPUT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_MD);
        style.spacing.button_padding = egui::vec2(15.0, 8.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Root panel frame, repainted every frame so the alert shows through
pub fn root_frame(alert: Option<AlertColor>) -> egui::Frame {
    egui::Frame::new()
        .fill(root_fill(alert))
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Ridged panel around the elapsed readout
pub fn readout_frame(alert: Option<AlertColor>) -> egui::Frame {
    egui::Frame::new()
        .fill(readout_fill(alert))
        .stroke(egui::Stroke::new(STROKE_THICK, BORDER_STRONG))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(20, 10))
}

pub fn clock_frame(alert: Option<AlertColor>) -> egui::Frame {
    egui::Frame::new()
        .fill(clock_fill(alert))
        .inner_margin(egui::Margin::symmetric(10, 4))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Filled action button with white label
pub fn button(text: impl Into<String>, fill: Color32, font_size: f32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .color(TEXT_PRIMARY)
            .size(font_size)
            .strong(),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(STROKE_DEFAULT, lighten(fill, 0.25)))
    .corner_radius(RADIUS_DEFAULT)
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
