//! Transport strategies behind [`ApiClient`](super::api::ApiClient).
//!
//! ARCHITECTURE
//! ============
//! Mock mode and real mode are two implementations of one `Transport` trait,
//! chosen once when the client is built. Pages only ever see status codes and
//! bodies, so none of them branch on the mode.
//!
//! Client-side (hydrate): `NetworkTransport` performs real HTTP via `gloo-net`.
//! Server-side (SSR): it reports `Unavailable`, since these calls are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::api::{LOGIN_PATH, LOGOUT_PATH, ONBOARDING_PATH, PROTECTED_PATH, SIGNUP_PATH};

/// Placeholder token handed out by the simulated login endpoint.
pub const MOCK_TOKEN: &str = "mock-token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute or same-origin URL, base URL already applied.
    pub url: String,
    /// JSON body; `None` sends no body at all.
    pub body: Option<serde_json::Value>,
    /// Token for the `Authorization: Bearer` header.
    pub bearer: Option<String>,
}

/// Raw response handed back to callers, who must inspect `status` themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn with_json(status: u16, body: &serde_json::Value) -> Self {
        Self { status, body: body.to_string() }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Failures below the HTTP status layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// One way of turning an [`ApiRequest`] into an [`ApiResponse`].
///
/// Futures are not `Send` because browser fetch futures are not.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Mock-mode transport: canned responses, no I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedTransport;

impl SimulatedTransport {
    pub(crate) fn respond(request: &ApiRequest) -> ApiResponse {
        let url = request.url.as_str();
        if url.contains(LOGIN_PATH) {
            return ApiResponse::with_json(200, &json!({ "token": MOCK_TOKEN, "message": "Login successful" }));
        }
        if url.contains(SIGNUP_PATH) {
            return ApiResponse::with_json(201, &json!({ "message": "Signup successful" }));
        }
        if url.contains(ONBOARDING_PATH) {
            return ApiResponse::with_json(200, &json!({ "message": "Onboarding complete" }));
        }
        if url.contains(LOGOUT_PATH) {
            return ApiResponse::with_json(200, &json!({ "message": "Logout successful" }));
        }
        if url.contains(PROTECTED_PATH) {
            let authorized = request.bearer.as_deref().is_some_and(|t| !t.is_empty());
            return if authorized {
                ApiResponse::with_json(200, &json!({ "message": "Authorized" }))
            } else {
                ApiResponse::with_json(401, &json!({ "detail": "Not authenticated" }))
            };
        }
        ApiResponse::with_json(404, &json!({ "detail": "Not Found" }))
    }
}

#[async_trait(?Send)]
impl Transport for SimulatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let response = Self::respond(&request);
        leptos::logging::log!("[mock] {} {} -> {}", request.method, request.url, response.status);
        Ok(response)
    }
}

/// Real-mode transport: JSON over `fetch` with credentials included.
/// No retries and no timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkTransport;

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[async_trait(?Send)]
impl Transport for NetworkTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            let builder = match request.bearer.as_deref() {
                Some(token) => builder.header("Authorization", &bearer_header(token)),
                None => builder,
            };
            let resp = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| TransportError::Encode(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
