//! Landing page with the hero and the two entry calls to action.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <Sidebar/>
            <main class="hero">
                <h1 class="hero__title">"Find the right tutor, right now."</h1>
                <p class="hero__subtitle">
                    "T.H.E. connects students with vetted tutors across every level and subject."
                </p>
                <div class="hero__actions">
                    <a href="/tutors" class="btn btn--primary">"Request a Tutor"</a>
                    <a href="/signup" class="btn">"Join Us"</a>
                </div>
            </main>
        </div>
    }
}
