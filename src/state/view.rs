//! Transient view state shared by the map, the pagination dots, the project panels and
//! the nav bar. `active_project` is written only by [`ViewAction::Scrolled`] and
//! [`ViewAction::SelectProject`].

use std::rc::Rc;

use yew::Reducible;

use super::scroll::{active_section, is_scrolled};
use crate::config::SyncConfig;

/// One measurement of the page taken by the scroll listener.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Top edge of each project section relative to the viewport, in display order.
    pub section_tops: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    Scrolled(ScrollSample),
    SelectProject(usize),
    /// A nav link was activated; the page scrolls to a fixed anchor.
    Navigate,
    ToggleMobileMenu,
    CloseMobileMenu,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active_project: usize,
    pub is_scrolled: bool,
    pub mobile_menu_open: bool,
    project_count: usize,
    sync: SyncConfig,
}

impl ViewState {
    pub fn new(project_count: usize, sync: SyncConfig) -> Self {
        Self {
            active_project: 0,
            is_scrolled: false,
            mobile_menu_open: false,
            project_count,
            sync,
        }
    }

    pub fn can_select(&self, index: usize) -> bool {
        index < self.project_count
    }

    /// Applies an action in place; returns whether anything changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        let before = (self.active_project, self.is_scrolled, self.mobile_menu_open);
        match action {
            ViewAction::Scrolled(sample) => {
                self.is_scrolled = is_scrolled(sample.scroll_y, &self.sync);
                if let Some(idx) = active_section(&sample.section_tops, sample.viewport_height, &self.sync) {
                    // Fewer measured sections than projects only happens mid-render.
                    if idx < self.project_count {
                        self.active_project = idx;
                    }
                }
            }
            ViewAction::SelectProject(idx) => {
                if !self.can_select(idx) {
                    log::warn!("ignoring selection of project {idx}, only {} exist", self.project_count);
                    return false;
                }
                self.active_project = idx;
                self.mobile_menu_open = false;
            }
            ViewAction::Navigate => {
                self.mobile_menu_open = false;
            }
            ViewAction::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
            }
            ViewAction::CloseMobileMenu => {
                self.mobile_menu_open = false;
            }
        }
        before != (self.active_project, self.is_scrolled, self.mobile_menu_open)
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) {
            Rc::new(new)
        } else {
            // Unchanged state keeps the same Rc so subscribers skip re-rendering.
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState::new(4, SyncConfig::default())
    }

    fn scrolled(scroll_y: f64, tops: &[f64]) -> ViewAction {
        ViewAction::Scrolled(ScrollSample {
            scroll_y,
            viewport_height: 800.0,
            section_tops: tops.to_vec(),
        })
    }

    #[test]
    fn starts_on_first_project() {
        let s = state();
        assert_eq!(s.active_project, 0);
        assert!(!s.is_scrolled);
        assert!(!s.mobile_menu_open);
    }

    #[test]
    fn select_in_range_takes_effect_immediately() {
        let mut s = state();
        for i in 0..4 {
            s.apply(ViewAction::SelectProject(i));
            assert_eq!(s.active_project, i);
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut s = state();
        s.apply(ViewAction::SelectProject(2));
        s.apply(ViewAction::ToggleMobileMenu);
        assert!(!s.apply(ViewAction::SelectProject(4)));
        assert!(!s.apply(ViewAction::SelectProject(usize::MAX)));
        assert_eq!(s.active_project, 2);
        assert!(s.mobile_menu_open);
    }

    #[test]
    fn select_always_closes_menu() {
        let mut s = state();
        s.apply(ViewAction::ToggleMobileMenu);
        assert!(s.mobile_menu_open);
        s.apply(ViewAction::SelectProject(1));
        assert!(!s.mobile_menu_open);
        s.apply(ViewAction::SelectProject(3));
        assert!(!s.mobile_menu_open);
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut s = state();
        s.apply(ViewAction::ToggleMobileMenu);
        assert!(s.mobile_menu_open);
        s.apply(ViewAction::ToggleMobileMenu);
        assert!(!s.mobile_menu_open);
        s.apply(ViewAction::ToggleMobileMenu);
        s.apply(ViewAction::CloseMobileMenu);
        assert!(!s.mobile_menu_open);
    }

    #[test]
    fn navigate_closes_menu_and_keeps_active_project() {
        let mut s = state();
        s.apply(ViewAction::SelectProject(2));
        s.apply(ViewAction::ToggleMobileMenu);
        assert!(s.apply(ViewAction::Navigate));
        assert!(!s.mobile_menu_open);
        assert_eq!(s.active_project, 2);
        // Closed menu: nothing to change
        assert!(!s.apply(ViewAction::Navigate));
        assert_eq!(s.active_project, 2);
    }

    #[test]
    fn scroll_without_match_keeps_active_project() {
        let mut s = state();
        s.apply(ViewAction::SelectProject(3));
        s.apply(scrolled(3000.0, &[-2400.0, -1600.0, -800.0, -400.0]));
        assert_eq!(s.active_project, 3);
        s.apply(scrolled(3000.0, &[-2400.0, -1600.0, -800.0, -400.0]));
        assert_eq!(s.active_project, 3);
    }

    #[test]
    fn scroll_picks_section_in_window() {
        let mut s = state();
        s.apply(scrolled(1000.0, &[-250.0, 100.0, 500.0, 900.0]));
        assert_eq!(s.active_project, 1);
    }

    #[test]
    fn scroll_sets_is_scrolled_on_threshold() {
        let mut s = state();
        for (y, expected) in [(49.0, false), (50.0, false), (51.0, true), (50.0, false)] {
            s.apply(scrolled(y, &[]));
            assert_eq!(s.is_scrolled, expected, "scroll_y = {y}");
        }
    }

    #[test]
    fn scroll_does_not_touch_menu() {
        let mut s = state();
        s.apply(ViewAction::ToggleMobileMenu);
        s.apply(scrolled(400.0, &[100.0]));
        assert!(s.mobile_menu_open);
    }

    #[test]
    fn select_then_top_then_scroll_returns_to_first() {
        let mut s = state();
        s.apply(ViewAction::SelectProject(2));
        assert_eq!(s.active_project, 2);
        // Scrolling to the top issues no action; the follow-up scroll event does.
        s.apply(scrolled(0.0, &[900.0, 1700.0, 2500.0, 3300.0]));
        assert_eq!(s.active_project, 2);
        s.apply(scrolled(0.0, &[120.0, 920.0, 1720.0, 2520.0]));
        assert_eq!(s.active_project, 0);
        assert!(!s.is_scrolled);
    }

    #[test]
    fn reduce_reuses_rc_when_unchanged() {
        let s = Rc::new(state());
        let same = s.clone().reduce(ViewAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&s, &same));
        let changed = s.clone().reduce(ViewAction::SelectProject(1));
        assert!(!Rc::ptr_eq(&s, &changed));
        assert_eq!(changed.active_project, 1);
    }
}
