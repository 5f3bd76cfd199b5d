use super::*;

#[test]
fn ripple_is_centred_on_click_and_sized_by_longer_side() {
    let ripple = RippleBox::centered_on((100.0, 50.0, 80.0, 24.0), 140.0, 62.0);
    assert_eq!(ripple, RippleBox { size: 80.0, left: 0.0, top: -28.0 });
}

#[test]
fn ripple_style_places_the_circle() {
    let ripple = RippleBox { size: 30.0, left: -5.0, top: 2.5 };
    assert_eq!(ripple.style(), "width: 30px; height: 30px; left: -5px; top: 2.5px");
}

#[test]
fn new_click_replaces_running_ripple() {
    let mut state = RippleState::default();
    let first = state.start(RippleBox { size: 10.0, left: 0.0, top: 0.0 });
    let second = state.start(RippleBox { size: 20.0, left: 1.0, top: 1.0 });
    assert_ne!(first, second);
    assert_eq!(state.active().map(|(seq, _)| seq), Some(second));
}

#[test]
fn stale_timer_keeps_newer_ripple() {
    let mut state = RippleState::default();
    let first = state.start(RippleBox { size: 10.0, left: 0.0, top: 0.0 });
    let second = state.start(RippleBox { size: 10.0, left: 0.0, top: 0.0 });
    assert!(!state.finish(first));
    assert!(state.active().is_some());
    assert!(state.finish(second));
    assert_eq!(state.active(), None);
}
