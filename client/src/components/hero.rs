//! Landing hero with the typewriter tagline and a light parallax drift.

use leptos::prelude::*;

use crate::components::typewriter::Typewriter;
use crate::state::ui::UiState;
use crate::util::scroll;

const TAGLINE: &str = "Full-stack developer building fast, accessible web experiences.";

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let image_style = move || {
        ui.get()
            .scroll
            .parallax
            .map(|offset| format!("transform: translateY({offset}px)"))
            .unwrap_or_default()
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__text">
                <h1>
                    "Hi, I'm "
                    <span id="animated-name" class="highlight">
                        "Alex Morgan"
                    </span>
                </h1>
                <Typewriter text=TAGLINE/>
                <div class="hero__buttons">
                    <a
                        href="#projects"
                        class="btn btn-primary"
                        on:click=move |ev| scroll::follow_anchor("#projects", &ev)
                    >
                        "View My Work"
                    </a>
                    <a href="/contact" class="btn btn-secondary">
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div class="hero__image" style=image_style>
                <img src="/images/profile.svg" alt="Profile illustration"/>
            </div>
        </section>
    }
}
