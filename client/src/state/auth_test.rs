use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::config::AppConfig;
use crate::net::test_support::RecordingTransport;
use crate::net::transport::{MOCK_TOKEN, Method};

fn api_with(transport: &Arc<RecordingTransport>) -> ApiClient {
    ApiClient::with_transport(&AppConfig { use_mock: false, base_url: String::new() }, transport.clone())
}

fn mock_api() -> ApiClient {
    ApiClient::from_config(&AppConfig::default())
}

fn signup_form() -> SignupForm {
    SignupForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        role: Some(Role::Tutor),
    }
}

// =============================================================
// AuthPhase / FlowError
// =============================================================

#[test]
fn auth_phase_default_is_anonymous() {
    assert_eq!(AuthPhase::default(), AuthPhase::Anonymous);
    assert!(!AuthPhase::default().is_submitting());
    assert!(AuthPhase::Submitting.is_submitting());
}

#[test]
fn auth_phase_failure_exposes_message() {
    assert_eq!(AuthPhase::Failed("nope".to_owned()).failure(), Some("nope"));
    assert_eq!(AuthPhase::Authenticated.failure(), None);
}

#[test]
fn flow_error_messages_are_user_facing() {
    assert_eq!(FlowError::Invalid(ROLE_REQUIRED).to_string(), "Please select a role.");
    assert_eq!(
        FlowError::Rejected { action: "Signup", status: 409 }.to_string(),
        "Signup failed. Please try again."
    );
    assert_eq!(
        FlowError::from(TransportError::Network("down".to_owned())).to_string(),
        "Network error. Please try again."
    );
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_password_mismatch_sends_nothing() {
    let transport = Arc::new(RecordingTransport::replying(201, "{}"));
    let form = SignupForm { confirm_password: "different".to_owned(), ..signup_form() };

    let err = block_on(submit_signup(&api_with(&transport), &form)).unwrap_err();

    assert_eq!(err, FlowError::Invalid(PASSWORD_MISMATCH));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn signup_without_role_sends_nothing() {
    let transport = Arc::new(RecordingTransport::replying(201, "{}"));
    let form = SignupForm { role: None, ..signup_form() };

    let err = block_on(submit_signup(&api_with(&transport), &form)).unwrap_err();

    assert_eq!(err, FlowError::Invalid(ROLE_REQUIRED));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn signup_mismatch_is_reported_before_missing_role() {
    let form = SignupForm { confirm_password: "x".to_owned(), role: None, ..signup_form() };
    assert_eq!(form.validate(), Err(FlowError::Invalid(PASSWORD_MISMATCH)));
}

#[test]
fn signup_created_returns_profile_and_sends_lowercase_role() {
    let transport = Arc::new(RecordingTransport::replying(201, "{}"));

    let profile = block_on(submit_signup(&api_with(&transport), &signup_form())).unwrap();

    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.role, Some(Role::Tutor));
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "/api/auth/signup");
    let body = sent[0].body.clone().unwrap();
    assert_eq!(body["userType"], "tutor");
    assert_eq!(body["password"], "secret");
}

#[test]
fn signup_other_success_codes_are_rejected() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let err = block_on(submit_signup(&api_with(&transport), &signup_form())).unwrap_err();
    assert_eq!(err, FlowError::Rejected { action: "Signup", status: 200 });
}

#[test]
fn signup_transport_failure_is_network_error() {
    let transport = Arc::new(RecordingTransport::failing());
    let err = block_on(submit_signup(&api_with(&transport), &signup_form())).unwrap_err();
    assert!(matches!(err, FlowError::Network(_)));
}

#[test]
fn signup_in_mock_mode_succeeds() {
    let profile = block_on(submit_signup(&mock_api(), &signup_form())).unwrap();
    assert_eq!(profile.role, Some(Role::Tutor));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_blank_fields_send_nothing() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let form = LoginForm { email: "   ".to_owned(), password: "pw".to_owned() };
    let err = block_on(submit_login(&api_with(&transport), &form)).unwrap_err();
    assert_eq!(err, FlowError::Invalid(CREDENTIALS_REQUIRED));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn login_ok_returns_token() {
    let transport = Arc::new(RecordingTransport::replying(200, r#"{"token":"t-1","message":"hi"}"#));
    let form = LoginForm { email: " ada@example.com ".to_owned(), password: "pw".to_owned() };

    let resp = block_on(submit_login(&api_with(&transport), &form)).unwrap();

    assert_eq!(resp.token, "t-1");
    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["email"], "ada@example.com");
}

#[test]
fn login_unauthorized_is_rejected() {
    let transport = Arc::new(RecordingTransport::replying(401, "{}"));
    let form = LoginForm { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let err = block_on(submit_login(&api_with(&transport), &form)).unwrap_err();
    assert_eq!(err, FlowError::Rejected { action: "Login", status: 401 });
}

#[test]
fn login_unreadable_body_is_network_error() {
    let transport = Arc::new(RecordingTransport::replying(200, "<html>"));
    let form = LoginForm { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let err = block_on(submit_login(&api_with(&transport), &form)).unwrap_err();
    assert!(matches!(err, FlowError::Network(TransportError::Decode(_))));
}

#[test]
fn login_in_mock_mode_returns_mock_token() {
    let form = LoginForm { email: "a@b.c".to_owned(), password: "anything".to_owned() };
    let resp = block_on(submit_login(&mock_api(), &form)).unwrap();
    assert_eq!(resp.token, MOCK_TOKEN);
}

// =============================================================
// Access gate
// =============================================================

#[test]
fn gate_without_token_denies_without_request() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let api = api_with(&transport);
    assert_eq!(block_on(check_access(&api, None)), GateState::Denied);
    assert_eq!(block_on(check_access(&api, Some(""))), GateState::Denied);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn gate_without_token_denies_in_mock_mode() {
    assert_eq!(block_on(check_access(&mock_api(), None)), GateState::Denied);
}

#[test]
fn gate_with_token_in_mock_mode_is_granted() {
    assert_eq!(block_on(check_access(&mock_api(), Some("anything"))), GateState::Granted);
}

#[test]
fn gate_ok_status_grants_and_sends_bearer() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    assert_eq!(block_on(check_access(&api_with(&transport), Some("tok"))), GateState::Granted);
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "/api/protected");
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
}

#[test]
fn gate_other_status_or_failure_denies() {
    let transport = Arc::new(RecordingTransport::replying(403, "{}"));
    assert_eq!(block_on(check_access(&api_with(&transport), Some("tok"))), GateState::Denied);
    let transport = Arc::new(RecordingTransport::failing());
    assert_eq!(block_on(check_access(&api_with(&transport), Some("tok"))), GateState::Denied);
}

#[test]
fn gate_state_default_is_checking() {
    assert_eq!(GateState::default(), GateState::Checking);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_posts_once_and_goes_home() {
    let transport = Arc::new(RecordingTransport::replying(200, r#"{"message":"bye"}"#));
    assert_eq!(block_on(perform_logout(&api_with(&transport))), HOME_ROUTE);
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "/api/auth/logout");
    assert!(sent[0].body.is_none());
}

#[test]
fn logout_goes_home_even_when_request_fails() {
    let transport = Arc::new(RecordingTransport::failing());
    assert_eq!(block_on(perform_logout(&api_with(&transport))), HOME_ROUTE);
    let transport = Arc::new(RecordingTransport::replying(500, "boom"));
    assert_eq!(block_on(perform_logout(&api_with(&transport))), HOME_ROUTE);
}
