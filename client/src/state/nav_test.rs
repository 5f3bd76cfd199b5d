use super::*;

// =============================================================
// NavOverlay transitions
// =============================================================

#[test]
fn overlay_default_is_closed() {
    assert_eq!(NavOverlay::default(), NavOverlay::Closed);
    assert_eq!(NavOverlay::default().body_overflow(), "");
}

#[test]
fn toggle_flips_state() {
    let mut nav = NavOverlay::Closed;
    assert!(nav.handle(NavEvent::Toggle));
    assert!(nav.is_open());
    assert!(nav.handle(NavEvent::Toggle));
    assert!(!nav.is_open());
}

#[test]
fn every_close_path_closes_open_overlay() {
    for event in [NavEvent::CloseButton, NavEvent::OutsideClick, NavEvent::Escape, NavEvent::LinkClick] {
        let mut nav = NavOverlay::Open;
        assert!(nav.handle(event), "{event:?}");
        assert_eq!(nav, NavOverlay::Closed);
    }
}

#[test]
fn escape_while_closed_is_a_noop() {
    let mut nav = NavOverlay::Closed;
    assert!(!nav.handle(NavEvent::Escape));
    assert_eq!(nav, NavOverlay::Closed);
}

#[test]
fn programmatic_open_is_idempotent() {
    let mut nav = NavOverlay::Closed;
    assert!(nav.handle(NavEvent::Open));
    assert!(!nav.handle(NavEvent::Open));
    assert!(nav.is_open());
}

#[test]
fn open_overlay_locks_body_scroll() {
    assert_eq!(NavOverlay::Open.body_overflow(), "hidden");
    assert_eq!(NavOverlay::Open.aria_expanded(), "true");
    assert_eq!(NavOverlay::Closed.aria_expanded(), "false");
}

#[test]
fn backdrop_click_counts_as_outside() {
    assert!(is_outside_click(["nav-menu active", "header", ""]));
}

#[test]
fn page_click_counts_as_outside() {
    assert!(is_outside_click(["section-title", "about", ""]));
    assert!(is_outside_click(std::iter::empty()));
}

#[test]
fn clicks_on_nav_controls_are_inside() {
    assert!(!is_outside_click(["hamburger", "nav-toggle active", "nav-actions"]));
    assert!(!is_outside_click(["nav-close", "nav-menu active"]));
    assert!(!is_outside_click(["", "", "nav-menu__links", "nav-menu active"]));
}

#[test]
fn class_tokens_match_whole_words() {
    assert!(is_outside_click(["nav-toggle-label"]));
}

// =============================================================
// ScrollState
// =============================================================

fn sections() -> Vec<SectionBox> {
    vec![
        SectionBox { id: "home".to_owned(), top: -400.0 },
        SectionBox { id: "about".to_owned(), top: 60.0 },
        SectionBox { id: "projects".to_owned(), top: 700.0 },
    ]
}

#[test]
fn snapshot_at_top_of_page() {
    let m = ScrollMetrics { scroll_y: 0.0, document_height: 2000.0, viewport_height: 1000.0 };
    let s = ScrollState::from_snapshot(&m, &[]);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.progress_width(), "0%");
    assert!(!s.header_scrolled);
    assert_eq!(s.active_section, None);
    assert_eq!(s.parallax, Some(0.0));
}

#[test]
fn snapshot_at_bottom_of_page() {
    let m = ScrollMetrics { scroll_y: 1000.0, document_height: 2000.0, viewport_height: 1000.0 };
    let s = ScrollState::from_snapshot(&m, &sections());
    assert_eq!(s.progress, 100.0);
    assert_eq!(s.progress_width(), "100%");
    assert!(s.header_scrolled);
    assert!(s.is_active("about"));
    assert!(!s.is_active("home"));
}

#[test]
fn update_keeps_last_parallax_past_the_hero() {
    let mut s = ScrollState::default();
    s.update(&ScrollMetrics { scroll_y: 400.0, document_height: 4000.0, viewport_height: 800.0 }, &[]);
    assert_eq!(s.parallax, Some(20.0));
    s.update(&ScrollMetrics { scroll_y: 1600.0, document_height: 4000.0, viewport_height: 800.0 }, &[]);
    assert_eq!(s.parallax, Some(20.0));
    assert!(s.progress > 0.0);
}

#[test]
fn update_replaces_stale_progress_after_page_change() {
    let bottom = ScrollMetrics { scroll_y: 1000.0, document_height: 2000.0, viewport_height: 1000.0 };
    let mut s = ScrollState::from_snapshot(&bottom, &sections());
    let short_page = ScrollMetrics { scroll_y: 0.0, document_height: 900.0, viewport_height: 1000.0 };
    s.update(&short_page, &[]);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.active_section, None);
    assert!(!s.header_scrolled);
}
