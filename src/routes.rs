//! Top-level router configuration combining pages, fragments and health.
//!
//! # Route Structure
//!
//! - `GET  /`, `/modify`, `/modify/{resource}` - Full pages
//! - `/htmx/*`          - HTMX fragments (`HX-Request: true` required)
//! - `GET  /health`     - Backend reachability (JSON)
//! - `/static/*`        - Static assets
//! - `/error/*`         - Static error pages, e.g. `/error/500.html`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **HTMX gate** - Fragment routes 404 outside HTMX
//! - **Path normalization** - Trailing slash handling, applied in [`crate::server`]

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Static files are served from `static/` relative to the working directory.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .nest("/htmx", web::routes::htmx_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .nest_service("/error", ServeDir::new("static/error"))
        .with_state(state)
        .layer(tracing::layer())
}
