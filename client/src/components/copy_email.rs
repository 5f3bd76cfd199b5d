//! Email address that copies itself to the clipboard on click.

use leptos::prelude::*;

use crate::util::clipboard::COPIED_LABEL;

#[component]
pub fn CopyEmail(email: &'static str) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::util::clipboard::copy_text(email).await {
                    Ok(()) => {
                        copied.set(true);
                        gloo_timers::callback::Timeout::new(crate::util::clipboard::COPY_FEEDBACK_MS, move || {
                            copied.set(false);
                        })
                        .forget();
                    }
                    Err(err) => log::warn!("failed to copy email: {err}"),
                }
            });
        }
    };

    view! {
        <p
            class="copy-email"
            class:copied=move || copied.get()
            title="Click to copy email address"
            on:click=on_click
        >
            {move || if copied.get() { COPIED_LABEL } else { email }}
        </p>
    }
}
