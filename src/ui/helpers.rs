//! Small rendering helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick (advances every third tick).
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 3) as usize % SPINNER_FRAMES.len()]
}

/// Cut `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Render a price like the product cards do: two decimals, dollar sign.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => String::new(),
    }
}
