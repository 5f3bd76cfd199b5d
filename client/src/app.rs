//! Root application component with routing, context providers, and the
//! document-level listeners shared by every page.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::net::backend::{BackendKind, ContactBackend};
use crate::pages::{contact::ContactPage, home::HomePage};
use crate::state::ui::UiState;

/// Delay before the page fade-in starts.
pub const PAGE_REVEAL_DELAY_MS: u32 = 100;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `backend` is written to `<html data-contact-backend>` so the hydrated
/// client submits through the backend the server was configured with.
pub fn shell(options: LeptosOptions, backend: BackendKind) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-contact-backend=backend.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state and contact backend contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    let backend = ContactBackend::from_document();
    #[cfg(feature = "hydrate")]
    log::info!("contact backend: {}", backend.kind().as_str());
    provide_context(backend);

    install_document_effects(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <ScrollSync/>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// =============================================================================
// DOCUMENT EFFECTS
// =============================================================================

/// Wire window listeners and mirror `UiState` onto `<html>`/`<body>`.
fn install_document_effects(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::nav::{self, NavEvent};
        use crate::util::theme;
        use wasm_bindgen::JsCast;

        // Theme is read once at startup.
        Effect::new(move || {
            let stored = theme::read_preference();
            theme::apply(stored);
            ui.update(|u| u.theme = stored);
        });

        Effect::new(move || {
            let state = ui.get();
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return;
            };
            body.set_class_name(state.body_class());
            let _ = body.style().set_property("overflow", state.nav.body_overflow());
        });

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| refresh_scroll(ui));

        let on_keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            ui.update(|u| {
                u.on_keydown(&key);
                if key == "Escape" {
                    u.nav.handle(NavEvent::Escape);
                }
            });
        });

        let on_mousedown = window_event_listener(leptos::ev::mousedown, move |_| {
            ui.update(UiState::on_mousedown);
        });

        let on_click = window_event_listener(leptos::ev::click, move |ev| {
            if !ui.get_untracked().nav.is_open() {
                return;
            }
            let mut class_path = Vec::new();
            let mut node = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            while let Some(el) = node {
                class_path.push(el.get_attribute("class").unwrap_or_default());
                node = el.parent_element();
            }
            if nav::is_outside_click(class_path.iter().map(String::as_str)) {
                ui.update(|u| {
                    u.nav.handle(NavEvent::OutsideClick);
                });
            }
        });

        on_cleanup(move || {
            on_scroll.remove();
            on_keydown.remove();
            on_mousedown.remove();
            on_click.remove();
        });

        gloo_timers::callback::Timeout::new(PAGE_REVEAL_DELAY_MS, move || {
            ui.update(|u| u.page_revealed = true);
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}

/// Recompute scroll-derived state on mount and after every route change, so
/// the progress bar and active link match a page that has not scrolled yet.
#[component]
fn ScrollSync() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let ui = expect_context::<RwSignal<UiState>>();
        let location = leptos_router::hooks::use_location();
        Effect::new(move || {
            location.pathname.track();
            refresh_scroll(ui);
        });
    }
}

#[cfg(feature = "hydrate")]
fn refresh_scroll(ui: RwSignal<UiState>) {
    use crate::util::scroll;

    let Some(metrics) = scroll::read_metrics() else {
        return;
    };
    let sections = scroll::read_sections();
    ui.update(|u| u.scroll.update(&metrics, &sections));
}
