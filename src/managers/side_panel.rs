//! Side Panel Flex Controller.
//!
//! Tracks whether the side menu is expanded and whether it follows the
//! viewport width automatically. A manual collapse switches automatic mode
//! off until the user expands the panel again.

use serde::Serialize;
use tracing::debug;

use crate::host::{Notifier, ShellChrome};
use crate::types::settings::SideSettings;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SidePanel {
    /// Follow the viewport width.
    auto: bool,
    /// Currently expanded.
    spread: bool,
    /// Last viewport classification (`width <= threshold`).
    is_min_win: bool,
    threshold: u32,
}

impl SidePanel {
    pub fn new(settings: &SideSettings) -> Self {
        Self {
            auto: settings.auto,
            spread: true,
            is_min_win: false,
            threshold: settings.min_width_threshold,
        }
    }

    pub fn is_spread(&self) -> bool {
        self.spread
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn is_min_win(&self) -> bool {
        self.is_min_win
    }

    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Expands or collapses the panel. No-op when already in that state.
    pub fn set_spread<C: ShellChrome + ?Sized>(&mut self, expand: bool, chrome: &mut C) -> bool {
        if expand == self.spread {
            return false;
        }
        chrome.set_side_spread(expand);
        self.spread = expand;
        true
    }

    /// Re-evaluates the panel after a resize. Only the top-level context in
    /// automatic mode reacts, and only when the viewport crosses the threshold.
    pub fn auto_adjust<C: ShellChrome + ?Sized>(
        &mut self,
        viewport_width: u32,
        is_top_level: bool,
        chrome: &mut C,
    ) -> bool {
        if !is_top_level || !self.auto {
            return false;
        }
        let is_min_win = viewport_width <= self.threshold;
        if is_min_win == self.is_min_win {
            return false;
        }
        debug!(viewport_width, is_min_win, "viewport crossed side threshold");
        self.is_min_win = is_min_win;
        self.set_spread(!is_min_win, chrome)
    }

    /// User clicked the flexible button.
    pub fn toggle<C: ShellChrome + ?Sized>(&mut self, chrome: &mut C) {
        self.auto = !self.spread;
        let expand = !self.spread;
        self.set_spread(expand, chrome);
    }

    /// A side menu group was clicked: always show the full menu.
    pub fn on_menu_group_click<C: ShellChrome + ?Sized>(&mut self, chrome: &mut C) -> bool {
        self.set_spread(true, chrome)
    }

    /// Group labels are hidden while collapsed, so hovering shows them as a tip.
    pub fn on_menu_group_enter<N: Notifier + ?Sized>(&self, label: &str, notifier: &mut N) -> bool {
        if self.spread {
            return false;
        }
        notifier.show_tip(label);
        true
    }

    pub fn on_menu_group_leave<N: Notifier + ?Sized>(&self, notifier: &mut N) {
        notifier.hide_tip();
    }
}
