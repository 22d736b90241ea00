//! Slide-out navigation drawer opened by the header's burger button.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// `(href, label)` pairs shown in the drawer.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/tutors", "THE Tutors"),
    ("/signup", "Sign Up"),
    ("/login", "Log In"),
];

pub(crate) fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(UiState::close_sidebar);

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            view! {
                <li>
                    <a href=href class="sidebar__link" on:click=move |_| close()>
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav
            class="sidebar"
            class:sidebar--open=move || ui.get().sidebar_open
            tabindex="-1"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_close_key(&ev.key()) {
                    close();
                }
            }
        >
            <button class="sidebar__close" aria-label="Close menu" on:click=move |_| close()>
                "×"
            </button>
            <ul class="sidebar__links">{links}</ul>
        </nav>
        <Show when=move || ui.get().sidebar_open>
            <div class="sidebar__scrim" on:click=move |_| close()></div>
        </Show>
    }
}
