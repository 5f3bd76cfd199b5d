//! One-shot viewport visibility callbacks and the scroll-reveal fade-in.
//!
//! Wraps `IntersectionObserver` so components can start an effect the first
//! time an element scrolls into view. The observer disconnects itself after
//! firing. Off the browser the callback is never invoked.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Visible fraction that reveals a faded-out block.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Reveal blocks slightly before their bottom edge clears the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Fade-in state of a scroll-revealed block.
///
/// Server-rendered markup stays `Static` so content is readable without
/// scripts. Hydration arms the block (`Hidden`) and the first intersection
/// reveals it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Static,
    Hidden,
    Revealed,
}

impl RevealPhase {
    /// Hide a block that has not been revealed yet.
    pub fn arm(&mut self) {
        if *self == Self::Static {
            *self = Self::Hidden;
        }
    }

    pub fn reveal(&mut self) {
        *self = Self::Revealed;
    }

    /// `base` plus the classes driving the fade-in.
    #[must_use]
    pub fn class_for(self, base: &str) -> String {
        match self {
            Self::Static => base.to_owned(),
            Self::Hidden => format!("{base} reveal"),
            Self::Revealed => format!("{base} reveal revealed"),
        }
    }
}

/// Run `callback` once, the first time `target` intersects the viewport.
#[cfg(feature = "hydrate")]
pub fn on_first_visible(
    target: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    callback: impl FnOnce() + 'static,
) {
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = RefCell::new(Some(callback));
    let handler = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(cb) = callback.borrow_mut().take() {
                cb();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    match web_sys::IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            // The observer holds the only JS reference to the handler.
            handler.forget();
        }
        Err(err) => log::warn!("intersection observer unavailable: {err:?}"),
    }
}
