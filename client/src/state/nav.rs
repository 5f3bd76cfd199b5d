//! Navigation chrome state: the mobile overlay and scroll-derived styling.
//!
//! DESIGN
//! ======
//! The overlay is a two-state machine driven by `NavEvent`s so every close
//! path (button, outside click, Escape, link) goes through one transition
//! function. Scroll-derived values are recomputed wholesale from a
//! `ScrollMetrics` snapshot on each scroll event; none of them depends on
//! another.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::scroll::{self, ScrollMetrics, SectionBox};

/// Mobile navigation overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavOverlay {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the overlay between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Hamburger button click; flips the state.
    Toggle,
    /// Programmatic open.
    Open,
    CloseButton,
    /// Click anywhere outside the toggle and the menu.
    OutsideClick,
    Escape,
    /// Click on a link inside the overlay.
    LinkClick,
}

impl NavOverlay {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Apply `event`; returns `true` when the state changed.
    pub fn handle(&mut self, event: NavEvent) -> bool {
        let next = match (event, *self) {
            (NavEvent::Toggle, Self::Closed) | (NavEvent::Open, _) => Self::Open,
            (NavEvent::Toggle, Self::Open)
            | (NavEvent::CloseButton | NavEvent::OutsideClick | NavEvent::Escape | NavEvent::LinkClick, _) => {
                Self::Closed
            }
        };
        let changed = next != *self;
        *self = next;
        changed
    }

    /// `overflow` value for `<body>`: scrolling is locked while the overlay is open.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        match self {
            Self::Open => "hidden",
            Self::Closed => "",
        }
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Classes of the elements that handle their own clicks while the overlay is
/// open. Clicks anywhere else, including the overlay backdrop, close it.
pub const NAV_CONTROL_CLASSES: &[&str] = &["nav-toggle", "nav-close", "nav-menu__links"];

/// Whether a click should close the open overlay.
///
/// `class_path` holds the `class` attribute of the click target followed by
/// each of its ancestors.
#[must_use]
pub fn is_outside_click<'a>(class_path: impl IntoIterator<Item = &'a str>) -> bool {
    !class_path
        .into_iter()
        .flat_map(str::split_whitespace)
        .any(|class| NAV_CONTROL_CLASSES.contains(&class))
}

/// Scroll-derived presentation state for the header and hero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Progress-bar width in percent.
    pub progress: f64,
    pub active_section: Option<String>,
    pub header_scrolled: bool,
    /// Hero translation in px; `None` keeps the last applied value.
    pub parallax: Option<f64>,
}

impl ScrollState {
    #[must_use]
    pub fn from_snapshot(metrics: &ScrollMetrics, sections: &[SectionBox]) -> Self {
        Self {
            progress: scroll::progress_percent(metrics),
            active_section: scroll::active_section(sections, scroll::ACTIVE_SECTION_OFFSET_PX).map(str::to_owned),
            header_scrolled: scroll::header_scrolled(metrics.scroll_y),
            parallax: scroll::parallax_offset(metrics),
        }
    }

    /// Fold a fresh snapshot in, keeping the last parallax offset once the
    /// hero is out of view.
    pub fn update(&mut self, metrics: &ScrollMetrics, sections: &[SectionBox]) {
        let next = Self::from_snapshot(metrics, sections);
        let parallax = next.parallax.or(self.parallax);
        *self = Self { parallax, ..next };
    }

    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress)
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}
