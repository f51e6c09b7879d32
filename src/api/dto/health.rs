//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each backend resource the UI depends on.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub drills: CheckStatus,
    pub categories: CheckStatus,
    pub sub_categories: CheckStatus,
    pub users: CheckStatus,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.iter().all(|(_, check)| check.is_ok())
    }

    /// Checks paired with their names, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CheckStatus)> {
        [
            ("drills", &self.drills),
            ("categories", &self.categories),
            ("sub_categories", &self.sub_categories),
            ("users", &self.users),
        ]
        .into_iter()
    }
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
