//! Edge gate: redirects protected paths to login when no session cookie is
//! present.
//!
//! Runs before page rendering, so a visitor without the cookie never sees
//! protected markup. The in-page token check still applies after it passes.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::config::{SESSION_COOKIE, ServerConfig};

/// True when `path` is `prefix` itself or lies below it.
pub(crate) fn requires_session(prefix: &str, path: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub async fn edge_gate(
    State(config): State<Arc<ServerConfig>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if requires_session(&config.protected_prefix, path) && jar.get(SESSION_COOKIE).is_none() {
        tracing::debug!(%path, "no session cookie; redirecting to login");
        return Redirect::temporary(&config.login_path).into_response();
    }
    next.run(request).await
}
