//! Role dashboards reached after onboarding (`/dashboard/tutor` and
//! `/dashboard/tutee`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes render this page; the heading follows the stored role.
//! Redirects to `/login` when the restored session is empty.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::logout_button::LogoutButton;
use crate::components::sidebar::Sidebar;
use crate::net::types::UserProfile;
use crate::state::auth::LOGIN_ROUTE;
use crate::state::session::UserSession;

/// Heading for the dashboard, e.g. `Tutor Dashboard`.
pub(crate) fn dashboard_title(profile: &UserProfile) -> String {
    match profile.role {
        Some(role) => format!("{} Dashboard", role.label()),
        None => "Dashboard".to_owned(),
    }
}

/// Filled-in profile fields as `(label, value)` rows, in display order.
pub(crate) fn profile_summary(profile: &UserProfile) -> Vec<(&'static str, String)> {
    let fields: [(&'static str, Option<&String>); 10] = [
        ("Email", Some(&profile.email)),
        ("School", profile.school.as_ref()),
        ("Level", profile.level.as_ref()),
        ("Subjects", profile.subjects.as_ref()),
        ("Address", profile.address.as_ref()),
        ("Phone", profile.phone_number.as_ref()),
        ("Rate", profile.rate.as_ref()),
        ("Experience", profile.experience.as_ref()),
        ("Education", profile.highest_education.as_ref()),
        ("Resume", profile.resume.as_ref()),
    ];
    fields
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value?.trim();
            (!value.is_empty()).then(|| (label, value.to_owned()))
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<UserSession>>();
    let navigate = use_navigate();

    // Checked once after restore; logout does its own navigation.
    let checked = StoredValue::new(false);
    Effect::new(move || {
        if checked.get_value() || !session.with(|s| s.restored) {
            return;
        }
        checked.set_value(true);
        if session.with_untracked(|s| s.profile().is_anonymous()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    let rows = move || {
        session.with(|s| {
            profile_summary(s.profile())
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="profile-row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="dashboard-page">
            <Header/>
            <Sidebar/>
            <main class="dashboard-page__main">
                <h1>{move || session.with(|s| dashboard_title(s.profile()))}</h1>
                <p class="dashboard-page__greeting">
                    {move || session.with(|s| format!("Welcome, {}!", s.profile().name))}
                </p>
                <dl class="profile-summary">{rows}</dl>
                <div class="dashboard-page__actions">
                    <a href="/tutors" class="btn">"Browse Tutors"</a>
                    <LogoutButton/>
                </div>
            </main>
        </div>
    }
}
