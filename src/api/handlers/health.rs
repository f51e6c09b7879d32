//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::BackendResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with backend checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Every backend list endpoint answered successfully
/// - **503 Service Unavailable**: One or more backends unreachable or failing
///
/// # Components Checked
///
/// Each check lists one resource, the same call the list windows make:
///
/// 1. **Drills**, **Categories**, **Sub-Categories**: REST API
/// 2. **Users**: Security API
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "drills": { "status": "ok", "message": "12 drills" },
///     "categories": { "status": "ok", "message": "4 categories" },
///     "sub_categories": { "status": "ok", "message": "9 sub_categories" },
///     "users": { "status": "error", "message": "Unreachable: backend request failed: ..." }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = run_checks(&state).await;
    let all_healthy = checks.all_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks every backend list endpoint concurrently.
pub async fn run_checks(state: &AppState) -> HealthChecks {
    let (drills, categories, sub_categories, users) = tokio::join!(
        state.drill_service.list(),
        state.category_service.list(),
        state.sub_category_service.list(),
        state.user_service.list(),
    );

    HealthChecks {
        drills: check("drills", drills),
        categories: check("categories", categories),
        sub_categories: check("sub_categories", sub_categories),
        users: check("users", users),
    }
}

fn check<T>(name: &str, result: Result<BackendResponse<Vec<T>>, AppError>) -> CheckStatus {
    match result {
        Ok(response) => match (response.payload(), response.error()) {
            (Some(items), _) => CheckStatus::ok(format!("{} {name}", items.len())),
            (None, error) => CheckStatus::error(format!(
                "Backend returned {}{}",
                response.status(),
                error.map(|e| format!(": {e}")).unwrap_or_default()
            )),
        },
        Err(e) => CheckStatus::error(format!("Unreachable: {e}")),
    }
}
