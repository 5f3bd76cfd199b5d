use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_nav_closed_and_unscrolled() {
    let state = UiState::default();
    assert_eq!(state.nav, NavOverlay::Closed);
    assert!(!state.scroll.header_scrolled);
    assert_eq!(state.scroll.progress, 0.0);
}

#[test]
fn ui_state_default_page_hidden_and_mouse_mode() {
    let state = UiState::default();
    assert!(!state.page_revealed);
    assert!(!state.keyboard_navigation);
    assert_eq!(state.body_class(), "");
}

// =============================================================
// Keyboard navigation mode
// =============================================================

#[test]
fn tab_enters_keyboard_navigation() {
    let mut state = UiState::default();
    state.on_keydown("Enter");
    assert!(!state.keyboard_navigation);
    state.on_keydown("Tab");
    assert!(state.keyboard_navigation);
    state.on_keydown("a");
    assert!(state.keyboard_navigation);
}

#[test]
fn mousedown_leaves_keyboard_navigation() {
    let mut state = UiState { keyboard_navigation: true, ..UiState::default() };
    state.on_mousedown();
    assert!(!state.keyboard_navigation);
}

#[test]
fn body_class_combines_flags() {
    let mut state = UiState { page_revealed: true, ..UiState::default() };
    assert_eq!(state.body_class(), "page-revealed");
    state.on_keydown("Tab");
    assert_eq!(state.body_class(), "keyboard-navigation page-revealed");
}
