//! Protected page: confirms the stored token with the API before rendering.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logout_button::LogoutButton;
use crate::net::api::ApiClient;
use crate::state::auth::{GateState, LOGIN_ROUTE, check_access};
use crate::state::session::UserSession;

/// Shows a loading state until the access check settles, then either the
/// protected content or a redirect to `/login`.
#[component]
pub fn ProtectedPage() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let gate = RwSignal::new(GateState::Checking);
    let started = StoredValue::new(false);

    // One check per visit, once the stored token has been read.
    Effect::new(move || {
        if !session.with(|s| s.restored) || started.get_value() {
            return;
        }
        started.set_value(true);
        let token = session.with_untracked(UserSession::token);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = check_access(&api, token.as_deref()).await;
            gate.set(outcome);
            if outcome == GateState::Denied {
                navigate(LOGIN_ROUTE, NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Protected Page"</h1>
                {move || match gate.get() {
                    GateState::Checking => view! { <p class="auth-card__status">"Loading..."</p> }.into_any(),
                    GateState::Granted => view! {
                        <div class="protected">
                            <p>"Welcome! This content is only available to signed-in users."</p>
                            <LogoutButton/>
                        </div>
                    }
                    .into_any(),
                    GateState::Denied => {
                        view! { <p class="auth-card__status">"Redirecting to login..."</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
