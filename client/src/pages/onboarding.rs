//! Onboarding page: completes the profile after signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached right after signup. Sends visitors without a profile back to
//! `/signup`, gates submit on the phone verification step, and lands the
//! user on their role's dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::state::auth::AuthPhase;
use crate::state::onboarding::{OnboardingForm, landing_route, submit_onboarding};
use crate::state::session::UserSession;
use crate::util::dialog::alert;

const SIGNUP_ROUTE: &str = "/signup";

/// Bind one `String` field of the form to a `TextField`.
fn bind(
    form: RwSignal<OnboardingForm>,
    get: fn(&OnboardingForm) -> &String,
    set: fn(&mut OnboardingForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |value: String| form.update(|f| set(f, value))),
    )
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let form = RwSignal::new(OnboardingForm::default());
    let code = RwSignal::new(String::new());
    let phase = RwSignal::new(AuthPhase::OnboardingIncomplete);
    let prefilled = StoredValue::new(false);

    let navigate_signup = navigate.clone();
    Effect::new(move || {
        let Some(profile) = session.with(|s| s.restored.then(|| s.profile().clone())) else {
            return;
        };
        if profile.name.is_empty() {
            navigate_signup(SIGNUP_ROUTE, NavigateOptions::default());
            return;
        }
        if !prefilled.get_value() {
            prefilled.set_value(true);
            form.set(OnboardingForm::for_profile(&profile));
        }
    });

    let is_tutor = move || session.with(|s| s.profile().role == Some(Role::Tutor));
    let verified = move || form.with(|f| f.is_phone_verified);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        let current = form.get_untracked();
        let profile = session.with_untracked(|s| s.profile().clone());
        phase.set(AuthPhase::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_onboarding(&api, &profile, &current).await {
                Ok(merged) => {
                    let route = landing_route(merged.role);
                    session.update(|s| s.set(merged));
                    phase.set(AuthPhase::OnboardingComplete);
                    navigate(route, NavigateOptions::default());
                }
                Err(e) => {
                    let message = e.to_string();
                    alert(&message);
                    phase.set(AuthPhase::Failed(message));
                }
            }
        });
    };

    let on_submit_code = move |_| {
        let entered = code.get_untracked();
        let accepted = form.try_update(|f| f.submit_verification_code(&entered)).unwrap_or(false);
        if accepted {
            code.set(String::new());
        } else {
            alert("Enter the code sent to your phone.");
        }
    };

    let (name, set_name) = bind(form, |f| &f.name, |f, v| f.name = v);
    let (school, set_school) = bind(form, |f| &f.school, |f, v| f.school = v);
    let (level, set_level) = bind(form, |f| &f.level, |f, v| f.level = v);
    let (subjects, set_subjects) = bind(form, |f| &f.subjects, |f, v| f.subjects = v);
    let (address, set_address) = bind(form, |f| &f.address, |f, v| f.address = v);
    let (phone, set_phone) = bind(form, |f| &f.phone_number, |f, v| f.phone_number = v);
    let (rate, set_rate) = bind(form, |f| &f.tutor.rate, |f, v| f.tutor.rate = v);
    let (experience, set_experience) = bind(form, |f| &f.tutor.experience, |f, v| f.tutor.experience = v);
    let (education, set_education) =
        bind(form, |f| &f.tutor.highest_education, |f, v| f.tutor.highest_education = v);
    let (resume, set_resume) = bind(form, |f| &f.tutor.resume, |f, v| f.tutor.resume = v);

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Tell us about yourself"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="Name" value=name on_input=set_name required=true/>
                    <TextField label="School" value=school on_input=set_school required=true/>
                    <TextField label="Level" value=level on_input=set_level placeholder="e.g. High School" required=true/>
                    <TextField label="Subjects" value=subjects on_input=set_subjects placeholder="Math, Physics" required=true/>
                    <TextField label="Address" value=address on_input=set_address required=true/>

                    <div class="form-field form-field--inline">
                        <TextField label="Phone number" value=phone on_input=set_phone input_type="tel" required=true/>
                        <button
                            type="button"
                            class="btn"
                            disabled=verified
                            on:click=move |_| form.update(OnboardingForm::begin_verification)
                        >
                            {move || if verified() { "Verified" } else { "Verify" }}
                        </button>
                    </div>
                    <Show when=move || form.with(|f| f.awaiting_code)>
                        <div class="form-field form-field--inline">
                            <label class="form-field">
                                <span class="form-field__label">"Enter verification code sent to your phone"</span>
                                <input
                                    class="form-field__input"
                                    type="text"
                                    placeholder="Enter code"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                />
                            </label>
                            <button type="button" class="btn" on:click=on_submit_code>
                                "Submit"
                            </button>
                        </div>
                    </Show>

                    <Show when=is_tutor>
                        <TextField label="Hourly rate" value=rate on_input=set_rate placeholder="$30"/>
                        <TextField label="Experience" value=experience on_input=set_experience placeholder="3 years"/>
                        <TextField label="Highest education" value=education on_input=set_education/>
                        <TextField label="Resume link" value=resume on_input=set_resume input_type="url"/>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Saving..." } else { "Finish" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
