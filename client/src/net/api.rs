//! API client used by every page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as `TransportError`; HTTP statuses are returned
//! untouched. Callers decide what counts as success for their endpoint.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, Method, NetworkTransport, SimulatedTransport, Transport, TransportError};
use crate::config::AppConfig;

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ONBOARDING_PATH: &str = "/api/onboarding";
pub const PROTECTED_PATH: &str = "/api/protected";

/// Handle to the transport strategy selected at startup.
///
/// Cheap to clone; provided to pages as a Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Pick the simulated or networked transport from `config.use_mock`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let transport: Arc<dyn Transport> = if config.use_mock {
            Arc::new(SimulatedTransport)
        } else {
            Arc::new(NetworkTransport)
        };
        Self::with_transport(config, transport)
    }

    #[must_use]
    pub fn with_transport(config: &AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config: config.clone(), transport }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded or the transport fails.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.transport
            .send(ApiRequest { method: Method::Post, url: self.url(path), body: Some(body), bearer: None })
            .await
    }

    /// `POST` without a body.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(ApiRequest { method: Method::Post, url: self.url(path), body: None, bearer: None })
            .await
    }

    /// `GET` with an `Authorization: Bearer` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn get_authorized(&self, path: &str, token: &str) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(ApiRequest { method: Method::Get, url: self.url(path), body: None, bearer: Some(token.to_owned()) })
            .await
    }
}
