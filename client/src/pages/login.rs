//! Login page: email and password against the auth API.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::{AFTER_LOGIN_ROUTE, AuthPhase, LoginForm, submit_login};
use crate::state::session::UserSession;
use crate::util::dialog::alert;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(AuthPhase::Anonymous);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        phase.set(AuthPhase::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_login(&api, &form).await {
                Ok(resp) => {
                    session.update(|s| s.set_token(&resp.token));
                    phase.set(AuthPhase::Authenticated);
                    navigate(AFTER_LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    let message = e.to_string();
                    alert(&message);
                    phase.set(AuthPhase::Failed(message));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Logging In..." } else { "Log In" }}
                    </button>
                </form>
                <Show when=move || phase.with(|p| p.failure().is_some())>
                    <p class="auth-card__error">{move || phase.with(|p| p.failure().unwrap_or_default().to_owned())}</p>
                </Show>
                <p class="auth-card__switch">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
