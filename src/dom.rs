// Thin DOM layer: measuring project sections and issuing smooth scrolls.
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::SyncConfig;
use crate::state::{ScrollSample, anchor_scroll_target};

fn window() -> Option<Window> {
    web_sys::window()
}

/// Measures the page for the scroll listener. Sections missing from the DOM end the
/// list early so indices always line up with project order.
pub fn sample_scroll<'a>(section_ids: impl IntoIterator<Item = &'a str>) -> Option<ScrollSample> {
    let window = window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let mut section_tops = Vec::new();
    for id in section_ids {
        match document.get_element_by_id(id) {
            Some(el) => section_tops.push(el.get_bounding_client_rect().top()),
            None => {
                log::debug!("section #{id} not mounted yet");
                break;
            }
        }
    }
    Some(ScrollSample {
        scroll_y,
        viewport_height,
        section_tops,
    })
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else { return };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scrolls so the element with `id` sits just below the fixed header.
pub fn scroll_to_anchor(id: &str, cfg: &SyncConfig) {
    let Some(window) = window() else { return };
    let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("no element #{id} to scroll to");
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = anchor_scroll_target(el.get_bounding_client_rect().top(), scroll_y, cfg);
    smooth_scroll_to(top);
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}
