//! Project technology tag with a click ripple.

use leptos::prelude::*;

use crate::util::ripple::RippleState;

#[component]
pub fn TechTag(label: &'static str) -> impl IntoView {
    let ripple = RwSignal::new(RippleState::default());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::ripple::{RIPPLE_MS, RippleBox};
            use wasm_bindgen::JsCast;

            let Some(tag) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let rect = tag.get_bounding_client_rect();
            let geometry = RippleBox::centered_on(
                (rect.left(), rect.top(), rect.width(), rect.height()),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            );
            let Some(seq) = ripple.try_update(|r| r.start(geometry)) else {
                return;
            };
            gloo_timers::callback::Timeout::new(RIPPLE_MS, move || {
                ripple.update(|r| {
                    r.finish(seq);
                });
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ripple);
        }
    };

    view! {
        <span class="tech-tag" on:click=on_click>
            {label}
            {move || {
                ripple
                    .get()
                    .active()
                    .map(|(_, geometry)| view! { <span class="ripple" style=geometry.style()></span> })
            }}
        </span>
    }
}
