//! Gate keeping HTMX fragment routes out of normal browser navigation.

use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Header HTMX sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";

/// Rejects requests that were not issued by HTMX.
///
/// Fragment routes return bare HTML snippets that make no sense as a page,
/// so a browser landing on one directly gets `404 Not Found` instead. The
/// header value is compared case-insensitively.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::web::middleware::htmx;
///
/// let fragments = Router::new()
///     .nest("/drill", drill_routes())
///     .route_layer(middleware::from_fn(htmx::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    if !is_htmx_request(req.headers()) {
        tracing::debug!(uri = %req.uri(), "Rejected non-HTMX request to fragment route");
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(req).await
}

fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}
