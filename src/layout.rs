// Pure string helpers for overlay markup. No DOM access so they can be
// tested on the host.

use crate::constants::*;

#[inline]
pub fn nav_item_id(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

#[inline]
pub fn nav_item_class(active: bool) -> String {
    if active {
        format!("{} {}", NAV_ITEM_CLASS, ACTIVE_CLASS)
    } else {
        NAV_ITEM_CLASS.to_string()
    }
}

/// Inline width for the mobile progress fill.
#[inline]
pub fn progress_fill_style(progress: f32) -> String {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("width:{:.2}%", p * 100.0)
}

#[inline]
pub fn visibility_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display:none"
    }
}

#[inline]
pub fn scroll_hint_text(mobile: bool) -> &'static str {
    if mobile {
        SCROLL_HINT_TEXT_MOBILE
    } else {
        SCROLL_HINT_TEXT_DESKTOP
    }
}

/// Whether the progress bar moved enough to be worth a DOM write.
#[inline]
pub fn progress_bar_needs_update(last: Option<f32>, progress: f32) -> bool {
    match last {
        // always land exactly on the ends
        Some(prev) if progress != prev && (progress == 0.0 || progress == 1.0) => true,
        Some(prev) => (prev - progress).abs() >= PROGRESS_BAR_EPSILON,
        None => true,
    }
}
