//! Scroll geometry helpers for the progress bar, active-section tracking,
//! header styling, parallax, and in-page smooth scrolling.
//!
//! DESIGN
//! ======
//! Every reaction to a scroll event is a pure function of a `ScrollMetrics`
//! snapshot (plus section tops where needed). The browser readers at the
//! bottom of this module are the only hydrate-specific code; everything else
//! is unit tested natively.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Distance from the viewport top a section must cross to become active.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;
/// Scroll position past which the header switches to its `scrolled` style.
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const PARALLAX_FACTOR: f64 = 0.05;

/// Snapshot of the window's vertical scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Maximum reachable `scroll_y`; zero when the document fits the viewport.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// A `section[id]` and the distance of its top edge from the viewport top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
}

/// Progress-bar fill in percent, clamped to `[0, 100]`.
#[must_use]
pub fn progress_percent(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable_height();
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Last section in document order whose top edge has crossed `offset`.
#[must_use]
pub fn active_section(sections: &[SectionBox], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.top <= offset)
        .map(|section| section.id.as_str())
}

#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD_PX
}

/// Hero image translation; `None` once the hero has scrolled out of view.
#[must_use]
pub fn parallax_offset(metrics: &ScrollMetrics) -> Option<f64> {
    if metrics.scroll_y < metrics.viewport_height {
        Some(metrics.scroll_y * PARALLAX_FACTOR)
    } else {
        None
    }
}

/// Absolute scroll target for an anchor whose top edge is at `element_top`
/// relative to the viewport.
#[must_use]
pub fn anchor_scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - HEADER_OFFSET_PX).max(0.0)
}

/// `#about` → `about`; anything that is not an in-page fragment → `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Section id targeted by a nav href: `/#about` and `#about` both → `about`.
#[must_use]
pub fn anchor_section(href: &str) -> Option<&str> {
    fragment_id(href.trim_start_matches('/'))
}

/// Anchor click handler: smooth-scroll to a section on the current page
/// instead of jumping. Links whose target is not on this page are left to
/// the router.
pub fn follow_anchor(href: &str, ev: &leptos::ev::MouseEvent) {
    let Some(id) = anchor_section(href) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        if scroll_to_id(id) {
            ev.prevent_default();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, ev);
    }
}

#[cfg(feature = "hydrate")]
pub fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
        viewport_height,
    })
}

#[cfg(feature = "hydrate")]
pub fn read_sections() -> Vec<SectionBox> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| SectionBox { id: el.id(), top: el.get_bounding_client_rect().top() })
        .collect()
}

/// Smoothly scroll so the element with `id` sits just below the fixed header.
#[cfg(feature = "hydrate")]
pub fn scroll_to_id(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let top = anchor_scroll_target(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
    );
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}
