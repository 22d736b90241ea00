//! Tutor directory data and client-side filtering.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of the listing slice and a `DirectoryFilter`,
//! recomputed on every keystroke or chip toggle. Dimensions combine with AND;
//! values selected within one dimension combine with OR. Source order is
//! preserved.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::collections::BTreeSet;

use crate::net::types::TutorListing;

/// Current search box text and chip selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub search: String,
    pub subjects: BTreeSet<String>,
    pub levels: BTreeSet<String>,
}

impl DirectoryFilter {
    /// Add `subject` if absent, remove it if present.
    pub fn toggle_subject(&mut self, subject: &str) {
        toggle(&mut self.subjects, subject);
    }

    /// Add `level` if absent, remove it if present.
    pub fn toggle_level(&mut self, level: &str) {
        toggle(&mut self.levels, level);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, tutor: &TutorListing) -> bool {
        let needle = self.search.to_lowercase();
        let text_hit = tutor.name.to_lowercase().contains(&needle)
            || tutor.subjects.iter().any(|s| s.to_lowercase().contains(&needle));
        let subject_hit = self.subjects.is_empty() || tutor.subjects.iter().any(|s| self.subjects.contains(s));
        let level_hit = self.levels.is_empty() || tutor.levels.iter().any(|l| self.levels.contains(l));
        text_hit && subject_hit && level_hit
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

/// Listings that pass `filter`, in source order.
#[must_use]
pub fn filter_tutors<'a>(tutors: &'a [TutorListing], filter: &DirectoryFilter) -> Vec<&'a TutorListing> {
    tutors.iter().filter(|t| filter.matches(t)).collect()
}

/// Distinct subjects in first-seen order.
#[must_use]
pub fn all_subjects(tutors: &[TutorListing]) -> Vec<String> {
    distinct(tutors.iter().flat_map(|t| t.subjects.iter()))
}

/// Distinct levels in first-seen order.
#[must_use]
pub fn all_levels(tutors: &[TutorListing]) -> Vec<String> {
    distinct(tutors.iter().flat_map(|t| t.levels.iter()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values.filter(|v| seen.insert(v.as_str())).cloned().collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    name: &str,
    subjects: &[&str],
    levels: &[&str],
    rating: f32,
    rate_per_hour: u32,
    experience: &str,
    availability: &str,
) -> TutorListing {
    TutorListing {
        id,
        name: name.to_owned(),
        subjects: subjects.iter().map(|s| (*s).to_owned()).collect(),
        levels: levels.iter().map(|s| (*s).to_owned()).collect(),
        rating,
        rate_per_hour,
        experience: experience.to_owned(),
        availability: availability.to_owned(),
    }
}

/// The built-in directory until listings come from a backend.
#[must_use]
pub fn sample_tutors() -> Vec<TutorListing> {
    vec![
        listing(
            1,
            "John Doe",
            &["Mathematics", "Physics"],
            &["Primary 5", "Primary 6", "Secondary 1"],
            4.8,
            30,
            "5 years",
            "Weekdays, Evenings",
        ),
        listing(
            2,
            "Jane Smith",
            &["English", "Literature"],
            &["Primary 3", "Primary 4", "Primary 5"],
            4.9,
            35,
            "7 years",
            "Weekends, Mornings",
        ),
        listing(
            3,
            "Mike Johnson",
            &["Chemistry", "Biology"],
            &["Secondary 2", "Secondary 3", "Secondary 4"],
            4.7,
            28,
            "3 years",
            "Flexible",
        ),
        listing(
            4,
            "Sarah Lee",
            &["History", "Geography"],
            &["Primary 4", "Primary 5", "Primary 6"],
            4.6,
            25,
            "4 years",
            "Weekdays, Afternoons",
        ),
        listing(
            5,
            "David Chen",
            &["Computer Science", "Mathematics"],
            &["Secondary 3", "Secondary 4", "Junior College"],
            4.9,
            40,
            "8 years",
            "Evenings, Weekends",
        ),
        listing(
            6,
            "Emily Brown",
            &["Art", "Design"],
            &["Primary 1", "Primary 2", "Primary 3"],
            4.8,
            32,
            "6 years",
            "Weekends",
        ),
    ]
}
