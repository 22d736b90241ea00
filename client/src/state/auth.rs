//! Auth flow state machine: signup, login, access gate, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the form signals and call these functions from a spawned local
//! task. Each function validates first, sends at most one request, and maps
//! the outcome into `FlowError`, whose `Display` text is what the user sees.
//! Session writes and navigation stay with the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiClient, LOGIN_PATH, LOGOUT_PATH, PROTECTED_PATH, SIGNUP_PATH};
use crate::net::transport::TransportError;
use crate::net::types::{LoginRequest, LoginResponse, Role, SignupRequest, UserProfile};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const ROLE_REQUIRED: &str = "Please select a role.";
pub const CREDENTIALS_REQUIRED: &str = "Enter both email and password.";

/// Where the user goes once signup succeeds.
pub const AFTER_SIGNUP_ROUTE: &str = "/onboarding";
/// Where the user goes once login succeeds.
pub const AFTER_LOGIN_ROUTE: &str = "/protected";
/// Where the gate sends users without a valid session.
pub const LOGIN_ROUTE: &str = "/login";
/// Where logout always lands.
pub const HOME_ROUTE: &str = "/";

/// Progress of the auth/onboarding flow for the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Submitting,
    Authenticated,
    /// Last attempt failed; the form stays editable.
    Failed(String),
    OnboardingIncomplete,
    OnboardingComplete,
}

impl AuthPhase {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, AuthPhase::Submitting)
    }

    /// User-visible failure text, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            AuthPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Why a flow did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Client-side validation failed; nothing was sent.
    #[error("{0}")]
    Invalid(&'static str),
    /// The API answered with a non-success status.
    #[error("{action} failed. Please try again.")]
    Rejected { action: &'static str, status: u16 },
    /// The request never produced a usable response.
    #[error("Network error. Please try again.")]
    Network(#[from] TransportError),
}

// =============================================================================
// SIGNUP
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

impl SignupForm {
    /// Check the form before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Invalid`] on a password mismatch or missing role.
    pub fn validate(&self) -> Result<Role, FlowError> {
        if self.password != self.confirm_password {
            return Err(FlowError::Invalid(PASSWORD_MISMATCH));
        }
        self.role.ok_or(FlowError::Invalid(ROLE_REQUIRED))
    }
}

/// Register a new account. Only `201 Created` counts as success.
///
/// Returns the fresh profile for the session on success.
///
/// # Errors
///
/// Returns a [`FlowError`] for invalid input, a rejected status, or a
/// transport failure.
pub async fn submit_signup(api: &ApiClient, form: &SignupForm) -> Result<UserProfile, FlowError> {
    let role = form.validate()?;
    let request = SignupRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        user_type: role.as_str().to_owned(),
    };

    let resp = api.post(SIGNUP_PATH, &request).await.inspect_err(|e| {
        leptos::logging::error!("signup request failed: {e}");
    })?;
    if resp.status != 201 {
        return Err(FlowError::Rejected { action: "Signup", status: resp.status });
    }

    Ok(UserProfile { name: form.name.clone(), email: form.email.clone(), role: Some(role), ..UserProfile::default() })
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`FlowError::Invalid`] when either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, FlowError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FlowError::Invalid(CREDENTIALS_REQUIRED));
        }
        Ok(LoginRequest { email: email.to_owned(), password: self.password.clone() })
    }
}

/// Exchange credentials for a token. Only `200 OK` counts as success.
///
/// # Errors
///
/// Returns a [`FlowError`] for blank fields, a rejected status, or a
/// transport/decode failure.
pub async fn submit_login(api: &ApiClient, form: &LoginForm) -> Result<LoginResponse, FlowError> {
    let request = form.validate()?;

    let resp = api.post(LOGIN_PATH, &request).await.inspect_err(|e| {
        leptos::logging::error!("login request failed: {e}");
    })?;
    if resp.status != 200 {
        return Err(FlowError::Rejected { action: "Login", status: resp.status });
    }

    let body: LoginResponse = resp.json().inspect_err(|e| {
        leptos::logging::error!("login response unreadable: {e}");
    })?;
    leptos::logging::log!("login: {}", body.message);
    Ok(body)
}

// =============================================================================
// ACCESS GATE
// =============================================================================

/// Outcome of the in-page protected-route check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Granted,
    Denied,
}

/// Ask the API whether `token` is still valid.
///
/// A missing or empty token is denied without any request.
pub async fn check_access(api: &ApiClient, token: Option<&str>) -> GateState {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return GateState::Denied;
    };
    match api.get_authorized(PROTECTED_PATH, token).await {
        Ok(resp) if resp.status == 200 => GateState::Granted,
        Ok(resp) => {
            leptos::logging::warn!("protected check rejected: {}", resp.status);
            GateState::Denied
        }
        Err(e) => {
            leptos::logging::error!("protected check failed: {e}");
            GateState::Denied
        }
    }
}

// =============================================================================
// LOGOUT
// =============================================================================

/// Tell the API the session is over. Best effort: the result never blocks
/// navigation, so this always returns the home route.
pub async fn perform_logout(api: &ApiClient) -> &'static str {
    match api.post_empty(LOGOUT_PATH).await {
        Ok(resp) => leptos::logging::log!("logout: {} {}", resp.status, resp.body),
        Err(e) => leptos::logging::warn!("logout notification failed: {e}"),
    }
    HOME_ROUTE
}
