//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered portfolio page through Leptos, the compiled
//! WASM/JS/CSS bundle from the site root, and a health probe. Every response
//! is gzip-compressed and every request traced.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Load Leptos options from the environment prepared by `cargo leptos`.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the configuration cannot be loaded
/// (missing or malformed `[[workspace.metadata.leptos]]` settings).
pub fn leptos_options() -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Full application router: `/healthz`, Leptos SSR routes, `/pkg` assets and
/// other site-root files as the fallback.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(site::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(options.clone());

    let site_root = PathBuf::from(options.site_root.as_ref());
    let pkg_dir = site_root.join(options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
