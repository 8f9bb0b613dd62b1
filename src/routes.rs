//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is a static bundle produced by the client build. Files are served
//! from the site directory; any path that does not match a file gets
//! `index.html`, so section deep links load the page. `/healthz` is the only
//! dynamic route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the router serving `site_dir`.
pub fn app(site_dir: &Path) -> Router {
    let index = ServeFile::new(site_dir.join("index.html"));
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true).fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
