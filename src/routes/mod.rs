//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR pages, the `/pkg` asset directory, and `/healthz` share one
//! Axum router. Every request passes the edge gate before reaching them.

pub mod gate;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS, and CSS emitted by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_edge(
        leptos_router.nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
        config,
    ))
}

/// Add `/healthz`, the edge gate, compression, and request tracing.
pub(crate) fn with_edge(router: Router, config: &ServerConfig) -> Router {
    router
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn_with_state(Arc::new(config.clone()), gate::edge_gate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
