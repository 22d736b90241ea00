use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), "\"tutor\"");
    assert_eq!(serde_json::to_string(&Role::Tutee).unwrap(), "\"tutee\"");
}

#[test]
fn role_accepts_capitalized_legacy_values() {
    let role: Role = serde_json::from_str("\"Tutee\"").unwrap();
    assert_eq!(role, Role::Tutee);
    let role: Role = serde_json::from_str("\"tutor\"").unwrap();
    assert_eq!(role, Role::Tutor);
}

#[test]
fn role_landing_routes_are_distinct() {
    assert_eq!(Role::Tutor.landing_route(), "/dashboard/tutor");
    assert_eq!(Role::Tutee.landing_route(), "/dashboard/tutee");
}

#[test]
fn default_profile_is_anonymous() {
    let profile = UserProfile::default();
    assert!(profile.is_anonymous());
    assert!(profile.role.is_none());
    assert!(!profile.is_phone_verified);
}

#[test]
fn profile_uses_camel_case_keys_and_skips_unset_fields() {
    let profile = UserProfile {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Some(Role::Tutor),
        phone_number: Some("91234567".to_owned()),
        ..UserProfile::default()
    };
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["userType"], "tutor");
    assert_eq!(value["phoneNumber"], "91234567");
    assert_eq!(value["isPhoneVerified"], false);
    assert!(value.get("school").is_none());
    assert!(value.get("resume").is_none());
}

#[test]
fn profile_reads_legacy_store_shape() {
    let raw = r#"{"name":"Bo","email":"bo@example.com","userType":"Tutee","school":"Hillview"}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.role, Some(Role::Tutee));
    assert_eq!(profile.school.as_deref(), Some("Hillview"));
    assert!(profile.level.is_none());
}

#[test]
fn signup_request_uses_user_type_key() {
    let request = SignupRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        user_type: Role::Tutor.as_str().to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["userType"], "tutor");
}

#[test]
fn login_response_message_is_optional() {
    let response: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(response.token, "abc");
    assert!(response.message.is_empty());
}

#[test]
fn empty_user_type_reads_as_no_role() {
    let raw = r#"{"name":"","email":"","userType":""}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile, UserProfile::default());

    let profile: UserProfile = serde_json::from_str(r#"{"name":"Cy","userType":null}"#).unwrap();
    assert_eq!(profile.role, None);
    assert_eq!(profile.name, "Cy");
}

#[test]
fn unknown_user_type_is_still_an_error() {
    assert!(serde_json::from_str::<UserProfile>(r#"{"userType":"admin"}"#).is_err());
}
