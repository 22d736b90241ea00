use super::*;
use crate::net::types::Role;

#[test]
fn title_follows_role() {
    let mut profile = UserProfile::default();
    assert_eq!(dashboard_title(&profile), "Dashboard");
    profile.role = Some(Role::Tutor);
    assert_eq!(dashboard_title(&profile), "Tutor Dashboard");
    profile.role = Some(Role::Tutee);
    assert_eq!(dashboard_title(&profile), "Tutee Dashboard");
}

#[test]
fn summary_skips_unset_and_blank_fields() {
    let profile = UserProfile {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        school: Some("Central High".to_owned()),
        level: Some("   ".to_owned()),
        rate: Some("$40".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(
        profile_summary(&profile),
        vec![
            ("Email", "ada@example.com".to_owned()),
            ("School", "Central High".to_owned()),
            ("Rate", "$40".to_owned()),
        ]
    );
}

#[test]
fn summary_of_empty_profile_is_empty() {
    assert!(profile_summary(&UserProfile::default()).is_empty());
}
