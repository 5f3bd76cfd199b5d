//! Block that fades up the first time it scrolls into view.

use leptos::prelude::*;

use crate::util::visibility::RevealPhase;

#[component]
pub fn Reveal(class: &'static str, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let phase = RwSignal::new(RevealPhase::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::visibility::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, on_first_visible};

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            phase.update(RevealPhase::arm);
            on_first_visible(&el, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move || {
                phase.update(RevealPhase::reveal);
            });
        });
    }

    view! {
        <div class=move || phase.get().class_for(class) node_ref=node>
            {children()}
        </div>
    }
}
