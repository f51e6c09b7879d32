//! Browser-facing layer: full pages and HTMX fragments.
//!
//! Pages and fragments are rendered server-side with Askama. Fragment routes
//! live under `/htmx` and are only served to HTMX requests.
//!
//! # Modules
//!
//! - [`handlers`] - Page and fragment handlers
//! - [`middleware`] - HTMX request gate
//! - [`routes`] - Page and fragment route configuration
//! - [`view_models`] - Rows and banners the templates render
//! - [`fragments`] - Templates shared by every resource
//! - [`form`] - Form bodies with repeated keys

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;

pub mod form;
pub mod fragments;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod view_models;

/// Result of a fragment handler.
pub type HtmxResult = Result<Response, AppError>;

/// Renders a fragment, turning template failures into [`AppError::Render`].
pub fn render<T: Template>(template: &T) -> HtmxResult {
    Ok(Html(template.render()?).into_response())
}
