// Pure geometry for scroll-driven section tracking. Inputs come from the DOM layer.
use crate::config::SyncConfig;

/// First section, in display order, whose top edge sits inside the activation window.
///
/// The window is `[cfg.window_top_px, viewport_height * cfg.window_bottom_ratio]`.
/// When several sections qualify the lowest index wins; `None` means the caller keeps
/// whatever section was active before.
pub fn active_section(section_tops: &[f64], viewport_height: f64, cfg: &SyncConfig) -> Option<usize> {
    let bottom = cfg.window_bottom(viewport_height);
    section_tops
        .iter()
        .position(|&top| top >= cfg.window_top_px && top <= bottom)
}

pub fn is_scrolled(scroll_y: f64, cfg: &SyncConfig) -> bool {
    scroll_y > cfg.scrolled_threshold_px
}

/// Document offset to scroll to so an element lands just below the fixed header.
pub fn anchor_scroll_target(element_top_in_viewport: f64, scroll_y: f64, cfg: &SyncConfig) -> f64 {
    element_top_in_viewport + scroll_y - cfg.header_offset_px
}
