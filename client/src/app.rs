//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, onboarding::OnboardingPage,
    protected::ProtectedPage, signup::SignupPage, tutors::TutorsPage,
};
use crate::state::{session::UserSession, ui::UiState};
use crate::util::storage::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the API client, user session, and shell state, and hands
/// each page a handle through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let api = ApiClient::from_config(&config);
    let session = RwSignal::new(UserSession::new(Arc::new(BrowserStore)));
    let ui = RwSignal::new(UiState::default());

    provide_context(api);
    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, where the store is real.
    Effect::new(move || session.update(UserSession::rehydrate));

    view! {
        <Stylesheet id="leptos" href="/pkg/tutorly.css"/>
        <Title text="T.H.E. Tutors"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("onboarding") view=OnboardingPage/>
                <Route path=StaticSegment("tutors") view=TutorsPage/>
                <Route path=StaticSegment("protected") view=ProtectedPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("tutor")) view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("tutee")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
