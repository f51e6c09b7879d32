//! Top-level error type for failures outside backend response reconciliation.
//!
//! Status-level backend failures (404, 400, 500...) never reach this type;
//! they are carried inside [`crate::domain::BackendResponse`] and shown in the
//! rendered fragment. [`AppError`] covers what cannot be rendered: the backend
//! being unreachable, a broken endpoint URL, or a template failing to render.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Page HTMX navigates to when a fragment request fails outright.
pub const ERROR_PAGE: &str = "/error/500.html";

/// Header instructing HTMX to perform a full client-side redirect.
pub const HX_REDIRECT: &str = "hx-redirect";

#[derive(Debug, Error)]
pub enum AppError {
    /// The backend could not be reached, timed out, or broke the connection.
    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    /// An endpoint URL could not be built from the configured base address.
    #[error("invalid backend endpoint: {0}")]
    Endpoint(String),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        Self::Endpoint(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Internal Error");

        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error").into_response();
        response
            .headers_mut()
            .insert(HX_REDIRECT, HeaderValue::from_static(ERROR_PAGE));
        response
    }
}
