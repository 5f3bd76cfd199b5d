//! Site footer with the newsletter signup form.

use leptos::prelude::*;

use crate::state::newsletter::NewsletterForm;

#[component]
pub fn Footer() -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = form.try_update(NewsletterForm::begin).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::state::newsletter::{SUBSCRIBE_DELAY_MS, SUBSCRIBED_RESET_MS};
            use gloo_timers::callback::Timeout;

            Timeout::new(SUBSCRIBE_DELAY_MS, move || {
                log::info!("newsletter subscription for {email}");
                form.update(NewsletterForm::complete);
                Timeout::new(SUBSCRIBED_RESET_MS, move || form.update(NewsletterForm::reset)).forget();
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
        }
    };

    view! {
        <footer class="footer">
            <div class="footer__newsletter">
                <h3>"Stay in the loop"</h3>
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        class="newsletter-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <button
                        class="newsletter-btn"
                        class:subscribed=move || form.get().phase() == crate::state::newsletter::NewsletterPhase::Subscribed
                        type="submit"
                        disabled=move || form.get().button_disabled()
                    >
                        {move || form.get().button_label()}
                    </button>
                </form>
            </div>
            <p class="footer__copyright">"© 2026 Alex Morgan. All rights reserved."</p>
        </footer>
    }
}
