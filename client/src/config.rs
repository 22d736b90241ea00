//! Application configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are baked in at
//! build time through `option_env!`. The server renderer compiles the same
//! crate with the same variables, keeping both halves of hydration aligned.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Mock mode is the default because this repository ships no backend.
pub const DEFAULT_USE_MOCK: bool = true;

/// Process-wide, read-only switches consumed by the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Fabricate API responses instead of performing network I/O.
    pub use_mock: bool,
    /// Prefix for every API path. Empty means same origin.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { use_mock: DEFAULT_USE_MOCK, base_url: String::new() }
    }
}

impl AppConfig {
    /// Build config from the environment captured at compile time.
    ///
    /// - `TUTORLY_USE_MOCK`: `true` (default) or `false`
    /// - `TUTORLY_API_BASE_URL`: empty (default) for same-origin requests
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TUTORLY_USE_MOCK"), option_env!("TUTORLY_API_BASE_URL"))
    }

    pub(crate) fn from_values(use_mock: Option<&str>, base_url: Option<&str>) -> Self {
        let use_mock = use_mock.and_then(parse_bool).unwrap_or(DEFAULT_USE_MOCK);
        let base_url = base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        Self { use_mock, base_url }
    }

    /// Join an API path onto the configured base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
