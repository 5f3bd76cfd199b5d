//! Fixed site header: scroll progress bar, section links, theme toggle, and
//! the mobile navigation overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `UiState` from context. Scroll-derived classes (`scrolled`,
//! `active`) are recomputed by the app-level scroll listener; this component
//! only reflects them. Every overlay transition goes through
//! `NavOverlay::handle`.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::NavEvent;
use crate::state::ui::UiState;
use crate::util::scroll;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/#home", label: "Home" },
    NavLink { href: "/#about", label: "About" },
    NavLink { href: "/#skills", label: "Skills" },
    NavLink { href: "/#projects", label: "Projects" },
    NavLink { href: "/contact", label: "Contact" },
];

fn nav_links(ui: RwSignal<UiState>) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|link| {
            let href = link.href;
            let is_active = move || scroll::anchor_section(href).is_some_and(|id| ui.get().scroll.is_active(id));
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ui.update(|u| {
                    u.nav.handle(NavEvent::LinkClick);
                });
                scroll::follow_anchor(href, &ev);
            };
            view! {
                <li>
                    <a href=href class:active=is_active on:click=on_click>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view()
}

/// Site header shown on every page.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let progress_style = move || format!("width: {}", ui.get().scroll.progress_width());
    let on_toggle = move |_| {
        ui.update(|u| {
            u.nav.handle(NavEvent::Toggle);
        });
    };

    view! {
        <header class="header" class:scrolled=move || ui.get().scroll.header_scrolled>
            <div class="scroll-progress" style=progress_style></div>
            <nav class="navbar">
                <a href="/" class="logo">
                    "Portfolio"
                </a>
                <ul class="lists">{nav_links(ui)}</ul>
                <div class="nav-actions">
                    <ThemeToggle/>
                    <button
                        class="nav-toggle"
                        class:active=move || ui.get().nav.is_open()
                        aria-label="Toggle navigation"
                        aria-expanded=move || ui.get().nav.aria_expanded()
                        on:click=on_toggle
                    >
                        <span class="hamburger"></span>
                    </button>
                </div>
            </nav>
            <MobileNav/>
        </header>
    }
}

/// Full-screen navigation overlay for narrow viewports.
#[component]
fn MobileNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_close = move |_| {
        ui.update(|u| {
            u.nav.handle(NavEvent::CloseButton);
        });
    };

    view! {
        <div class="nav-menu" class:active=move || ui.get().nav.is_open()>
            <button class="nav-close" aria-label="Close navigation" on:click=on_close>
                "✕"
            </button>
            <ul class="nav-menu__links">{nav_links(ui)}</ul>
        </div>
    }
}
