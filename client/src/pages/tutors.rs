//! Tutor directory: search box, subject and level chips, card grid.
//!
//! DESIGN
//! ======
//! The listing is the built-in sample set; filtering is local and re-runs
//! whenever the search text or a chip changes.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::tutor_card::TutorCard;
use crate::net::types::TutorListing;
use crate::state::directory::{DirectoryFilter, all_levels, all_subjects, filter_tutors, sample_tutors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Facet {
    Subject,
    Level,
}

impl Facet {
    fn is_selected(self, filter: &DirectoryFilter, value: &str) -> bool {
        match self {
            Facet::Subject => filter.subjects.contains(value),
            Facet::Level => filter.levels.contains(value),
        }
    }

    fn toggle(self, filter: &mut DirectoryFilter, value: &str) {
        match self {
            Facet::Subject => filter.toggle_subject(value),
            Facet::Level => filter.toggle_level(value),
        }
    }
}

#[component]
fn FacetChips(
    title: &'static str,
    facet: Facet,
    values: Vec<String>,
    filter: RwSignal<DirectoryFilter>,
) -> impl IntoView {
    let chips = values
        .into_iter()
        .map(|value| {
            let for_class = value.clone();
            let for_click = value.clone();
            view! {
                <button
                    type="button"
                    class="chip"
                    class:chip--active=move || filter.with(|f| facet.is_selected(f, &for_class))
                    on:click=move |_| filter.update(|f| facet.toggle(f, &for_click))
                >
                    {value}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="facet">
            <h3 class="facet__title">{title}</h3>
            <div class="facet__chips">{chips}</div>
        </section>
    }
}

#[component]
pub fn TutorsPage() -> impl IntoView {
    let tutors = StoredValue::new(sample_tutors());
    let subjects = tutors.with_value(|t| all_subjects(t));
    let levels = tutors.with_value(|t| all_levels(t));

    let filter = RwSignal::new(DirectoryFilter::default());
    let show_filters = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        filter.with(|f| tutors.with_value(|t| filter_tutors(t, f).into_iter().cloned().collect::<Vec<_>>()))
    });

    view! {
        <div class="tutors-page">
            <Header/>
            <Sidebar/>
            <main class="tutors-page__main">
                <h1>"THE Tutors"</h1>
                <div class="tutors-page__controls">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search tutors by name or subject"
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.search = value);
                        }
                    />
                    <button class="btn" on:click=move |_| show_filters.update(|v| *v = !*v)>
                        {move || if show_filters.get() { "Hide Filters" } else { "Filters" }}
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| filter.update(DirectoryFilter::clear)>
                        "Clear"
                    </button>
                </div>
                <Show when=move || show_filters.get()>
                    <FacetChips title="Filter by Subject:" facet=Facet::Subject values=subjects.clone() filter=filter/>
                    <FacetChips title="Filter by Level:" facet=Facet::Level values=levels.clone() filter=filter/>
                </Show>
                <div class="tutors-page__grid">
                    <For
                        each=move || visible.get()
                        key=|tutor: &TutorListing| tutor.id
                        children=move |tutor: TutorListing| view! { <TutorCard tutor=tutor/> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="tutors-page__empty">"No tutors found. Try adjusting your search or filters."</p>
                </Show>
            </main>
        </div>
    }
}
