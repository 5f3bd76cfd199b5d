//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| {
                let next = theme::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || ui.get().theme.toggle_icon()}
        </button>
    }
}
