//! Logout button shared by the protected page and the dashboards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::perform_logout;
use crate::state::session::UserSession;

/// Notifies the API, clears the session, and returns home. The session is
/// cleared even when the API call fails.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let target = perform_logout(&api).await;
            session.update(UserSession::clear);
            busy.set(false);
            navigate(target, NavigateOptions::default());
        });
    };

    view! {
        <button class="btn btn--logout" on:click=on_click disabled=move || busy.get()>
            "Log Out"
        </button>
    }
}
