//! Utility functions

use crate::constants::DATA_DIR_NAME;
use crate::types::ParseDurationError;
use chrono::NaiveTime;
use std::path::PathBuf;
use std::time::Duration;

// Square viewBox — for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="27" y="2" width="10" height="6" rx="2" fill="#ffcc00"/><rect x="30" y="7" width="4" height="6" fill="#ffcc00"/><circle cx="32" cy="37" r="24" fill="#1e1e1e" stroke="#00ff00" stroke-width="4"/><path d="M32 37 L32 20" stroke="#00ffff" stroke-width="4" stroke-linecap="round"/><path d="M32 37 L44 43" stroke="#ff0000" stroke-width="3" stroke-linecap="round"/><circle cx="32" cy="37" r="3" fill="#ffffff"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings.json, logs/)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Format elapsed time as HH:MM:SS.mmm (milliseconds truncated)
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let mins = (total / 60) % 60;
    let secs = total % 60;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        mins,
        secs,
        elapsed.subsec_millis()
    )
}

/// Format a wall clock time as HH:MM:SS
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Parse "H:M:S" into total seconds. Each field may carry surrounding
/// whitespace and may exceed its usual range ("0:90:0" is 5400).
pub fn parse_duration(text: &str) -> Result<u64, ParseDurationError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 3 {
        return Err(ParseDurationError::FieldCount(fields.len()));
    }

    let mut total: u64 = 0;
    for (field, unit) in fields.iter().zip([3600u64, 60, 1]) {
        let field = field.trim();
        let value: u64 = field
            .parse()
            .map_err(|_| ParseDurationError::InvalidField(field.to_string()))?;
        total = value
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or(ParseDurationError::Overflow)?;
    }
    Ok(total)
}
