use std::sync::Arc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::test_support::RecordingTransport;
use crate::net::transport::MOCK_TOKEN;
use crate::net::types::LoginResponse;

fn real_config(base_url: &str) -> AppConfig {
    AppConfig { use_mock: false, base_url: base_url.to_owned() }
}

#[test]
fn url_prefixes_base_url() {
    let api = ApiClient::from_config(&real_config("https://api.example.test"));
    assert_eq!(api.url(LOGIN_PATH), "https://api.example.test/api/auth/login");
}

#[test]
fn url_matches_config_endpoint() {
    let config = AppConfig::from_values(Some("false"), Some("http://backend/"));
    let api = ApiClient::from_config(&config);
    assert_eq!(api.url(PROTECTED_PATH), config.endpoint(PROTECTED_PATH));
    assert_eq!(api.url(PROTECTED_PATH), "http://backend/api/protected");
}

#[test]
fn mock_config_uses_simulated_login() {
    let api = ApiClient::from_config(&AppConfig::default());
    let resp = block_on(api.post(LOGIN_PATH, &json!({ "email": "a@b.c", "password": "x" }))).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.json::<LoginResponse>().unwrap().token, MOCK_TOKEN);
}

#[test]
fn real_config_uses_network_transport() {
    let api = ApiClient::from_config(&real_config(""));
    let err = block_on(api.post_empty(LOGOUT_PATH)).unwrap_err();
    assert_eq!(err, TransportError::Unavailable);
}

#[test]
fn post_sends_json_body_to_resolved_url() {
    let transport = Arc::new(RecordingTransport::replying(201, "{}"));
    let api = ApiClient::with_transport(&real_config("http://backend"), transport.clone());

    let resp = block_on(api.post(SIGNUP_PATH, &json!({ "name": "Ada" }))).unwrap();

    assert_eq!(resp.status, 201);
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "http://backend/api/auth/signup");
    assert_eq!(sent[0].body, Some(json!({ "name": "Ada" })));
    assert!(sent[0].bearer.is_none());
}

#[test]
fn post_empty_sends_no_body() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let api = ApiClient::with_transport(&real_config(""), transport.clone());

    block_on(api.post_empty(LOGOUT_PATH)).unwrap();

    assert!(transport.requests()[0].body.is_none());
}

#[test]
fn get_authorized_carries_bearer_token() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let api = ApiClient::with_transport(&real_config(""), transport.clone());

    block_on(api.get_authorized(PROTECTED_PATH, "tok")).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
}

#[test]
fn non_success_status_is_not_an_error() {
    let transport = Arc::new(RecordingTransport::replying(500, "oops"));
    let api = ApiClient::with_transport(&real_config(""), transport);
    let resp = block_on(api.post(ONBOARDING_PATH, &json!({}))).unwrap();
    assert_eq!(resp.status, 500);
}

#[test]
fn transport_failure_propagates() {
    let transport = Arc::new(RecordingTransport::failing());
    let api = ApiClient::with_transport(&real_config(""), transport);
    let err = block_on(api.post(ONBOARDING_PATH, &json!({}))).unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}
