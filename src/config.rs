//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROTECTED_PREFIX: &str = "/protected";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Cookie set by the auth backend; its presence opens the edge gate.
pub const SESSION_COOKIE: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub protected_prefix: String,
    pub login_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment (after `.env` loading).
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PROTECTED_PREFIX`: default `/protected`
    /// - `LOGIN_PATH`: default `/login`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            protected_prefix: normalize_path(lookup("PROTECTED_PREFIX"), DEFAULT_PROTECTED_PREFIX),
            login_path: normalize_path(lookup("LOGIN_PATH"), DEFAULT_LOGIN_PATH),
        })
    }
}

/// Absolute path without a trailing slash; blank falls back to `default`.
fn normalize_path(raw: Option<String>, default: &str) -> String {
    let trimmed = raw.as_deref().map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        return default.to_owned();
    }
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}
