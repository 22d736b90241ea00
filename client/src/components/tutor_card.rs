//! Card summarizing one tutor in the directory grid.

#[cfg(test)]
#[path = "tutor_card_test.rs"]
mod tutor_card_test;

use leptos::prelude::*;

use crate::net::types::TutorListing;

pub(crate) fn format_rating(rating: f32) -> String {
    format!("★ {rating:.1}")
}

pub(crate) fn format_rate(rate_per_hour: u32) -> String {
    format!("${rate_per_hour}/hour")
}

#[component]
pub fn TutorCard(tutor: TutorListing) -> impl IntoView {
    view! {
        <article class="tutor-card">
            <div class="tutor-card__header">
                <h3 class="tutor-card__name">{tutor.name.clone()}</h3>
                <span class="tutor-card__rating">{format_rating(tutor.rating)}</span>
            </div>
            <p class="tutor-card__row">
                <span class="tutor-card__label">"Subjects: "</span>
                {tutor.subjects.join(", ")}
            </p>
            <p class="tutor-card__row">
                <span class="tutor-card__label">"Levels: "</span>
                {tutor.levels.join(", ")}
            </p>
            <p class="tutor-card__row">
                <span class="tutor-card__label">"Experience: "</span>
                {tutor.experience.clone()}
            </p>
            <p class="tutor-card__row">
                <span class="tutor-card__label">"Availability: "</span>
                {tutor.availability.clone()}
            </p>
            <p class="tutor-card__rate">{format_rate(tutor.rate_per_hour)}</p>
        </article>
    }
}
