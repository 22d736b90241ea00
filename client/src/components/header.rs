//! Top bar with the burger menu button and the brand link.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="site-header">
            <button
                class="site-header__burger"
                aria-label="Open menu"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <a href="/" class="site-header__brand">"T.H.E."</a>
            <a href="/login" class="site-header__login">"Log In"</a>
        </header>
    }
}
