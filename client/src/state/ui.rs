//! Local UI chrome state (theme, navigation overlay, scroll styling).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one context-provided signal so
//! the header, overlay, and pages can react to the same values without
//! reaching into the DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::nav::{NavOverlay, ScrollState};
use crate::util::theme::Theme;

/// UI state for theme, navigation overlay, scroll effects, and focus mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub nav: NavOverlay,
    pub scroll: ScrollState,
    /// Set while the visitor navigates with the keyboard; enables focus rings.
    pub keyboard_navigation: bool,
    /// Flipped shortly after mount to fade the page in.
    pub page_revealed: bool,
}

impl UiState {
    /// `Tab` enters keyboard-navigation mode; other keys leave it as is.
    pub fn on_keydown(&mut self, key: &str) {
        if key == "Tab" {
            self.keyboard_navigation = true;
        }
    }

    pub fn on_mousedown(&mut self) {
        self.keyboard_navigation = false;
    }

    /// Class list for `<body>`.
    #[must_use]
    pub fn body_class(&self) -> &'static str {
        match (self.keyboard_navigation, self.page_revealed) {
            (true, true) => "keyboard-navigation page-revealed",
            (true, false) => "keyboard-navigation",
            (false, true) => "page-revealed",
            (false, false) => "",
        }
    }
}
