//! Signup page: name, email, password twice, and a role choice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::state::auth::{AFTER_SIGNUP_ROUTE, AuthPhase, SignupForm, submit_signup};
use crate::state::session::UserSession;
use crate::util::dialog::alert;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let show_password = RwSignal::new(false);
    let phase = RwSignal::new(AuthPhase::Anonymous);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            role: role.get_untracked(),
        };
        phase.set(AuthPhase::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_signup(&api, &form).await {
                Ok(profile) => {
                    session.update(|s| s.set(profile));
                    phase.set(AuthPhase::OnboardingIncomplete);
                    navigate(AFTER_SIGNUP_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    let message = e.to_string();
                    alert(&message);
                    phase.set(AuthPhase::Failed(message));
                }
            }
        });
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    let role_options = Role::ALL
        .into_iter()
        .map(|r| {
            view! {
                <label class="auth-form__radio">
                    <input
                        type="radio"
                        name="role"
                        value=r.as_str()
                        prop:checked=move || role.get() == Some(r)
                        on:change=move |_| role.set(Some(r))
                    />
                    <span>{r.label()}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type=password_type
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type=password_type
                        placeholder="Confirm password"
                        required
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_password.get()
                            on:change=move |_| show_password.update(|v| *v = !*v)
                        />
                        <span>"Show password"</span>
                    </label>
                    <fieldset class="auth-form__roles">
                        <legend>"I am a"</legend>
                        {role_options}
                    </fieldset>
                    <button class="btn btn--primary" type="submit" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Signing Up..." } else { "Next" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
