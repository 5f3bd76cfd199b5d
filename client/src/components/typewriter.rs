//! Tagline that types itself out after the hero entrance animation.

use leptos::prelude::*;

/// Renders `text` in full on the server; after hydration the text is cleared
/// and revealed one character at a time.
#[component]
pub fn Typewriter(text: &'static str) -> impl IntoView {
    let shown = RwSignal::new(text.to_owned());

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        use crate::util::animation::{self, TYPEWRITER_CHAR_MS, TYPEWRITER_START_DELAY_MS};

        Effect::new(move || {
            shown.set(String::new());
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(TYPEWRITER_START_DELAY_MS))).await;
                let mut writer = animation::Typewriter::new(text);
                while let Some(frame) = writer.next_frame() {
                    shown.set(frame);
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(TYPEWRITER_CHAR_MS))).await;
                }
            });
        });
    }

    view! { <p class="tagline">{move || shown.get()}</p> }
}
