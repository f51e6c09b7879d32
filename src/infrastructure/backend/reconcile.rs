//! Turns a raw backend reply into a [`BackendResponse`].
//!
//! Every backend operation follows the same rules, differing only in which
//! status means success, whether a lookup can miss, and whether the backend
//! may answer with a validation error. A [`Reconciler`] captures those
//! differences per call:
//!
//! ```rust,ignore
//! let response = Reconciler::expect(StatusCode::OK)
//!     .not_found(format!("Drill {id}"))
//!     .with_validation()
//!     .reconcile(raw.status, &raw.body);
//! ```
//!
//! | Backend status            | Result                                          |
//! |---------------------------|-------------------------------------------------|
//! | expected success          | body deserialized, or the declared empty value  |
//! | 204 with an empty value   | the declared empty value                        |
//! | 404 with a subject        | `Not Found: <subject> does not exist.`          |
//! | 400 with validation       | backend `ErrorMessage` passed through           |
//! | anything else             | `500 Internal Error: Please try again later.`   |
//!
//! Deserialization failures of a success or validation body also collapse to
//! the generic internal error.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::domain::BackendResponse;
use crate::domain::entities::ErrorMessage;

/// Per-call reconciliation rules.
#[derive(Debug)]
pub struct Reconciler<T> {
    success: StatusCode,
    empty: Option<T>,
    not_found: Option<String>,
    validation: bool,
}

impl<T: DeserializeOwned> Reconciler<T> {
    /// Starts a reconciler whose success status is `success`.
    pub fn expect(success: StatusCode) -> Self {
        Self {
            success,
            empty: None,
            not_found: None,
            validation: false,
        }
    }

    /// Payload used when the backend succeeds without a body, including a
    /// `204 No Content` on endpoints that normally answer `200`.
    pub fn or_empty(mut self, value: T) -> Self {
        self.empty = Some(value);
        self
    }

    /// Maps `404` to a not-found error naming `subject`.
    pub fn not_found(mut self, subject: impl Into<String>) -> Self {
        self.not_found = Some(subject.into());
        self
    }

    /// Passes `400` bodies through as the backend's own [`ErrorMessage`].
    pub fn with_validation(mut self) -> Self {
        self.validation = true;
        self
    }

    pub fn reconcile(self, status: StatusCode, body: &str) -> BackendResponse<T> {
        debug!(%status, expected = %self.success, "reconciling backend response");

        let no_content = status == StatusCode::NO_CONTENT && self.empty.is_some();
        if status == self.success || no_content {
            return match self.empty {
                Some(empty) if body.trim().is_empty() => BackendResponse::success(status, empty),
                _ => match serde_json::from_str::<T>(body) {
                    Ok(payload) => BackendResponse::success(status, payload),
                    Err(e) => {
                        error!(%status, error = %e, "failed to deserialize backend payload");
                        BackendResponse::internal_error()
                    }
                },
            };
        }

        match (status, self.not_found) {
            (StatusCode::NOT_FOUND, Some(subject)) => BackendResponse::not_found(subject),
            (StatusCode::BAD_REQUEST, _) if self.validation => {
                match serde_json::from_str::<ErrorMessage>(body) {
                    Ok(message) => BackendResponse::failure(StatusCode::BAD_REQUEST, message),
                    Err(e) => {
                        error!(error = %e, "failed to deserialize backend error message");
                        BackendResponse::internal_error()
                    }
                }
            }
            _ => {
                error!(%status, "unexpected backend status");
                BackendResponse::internal_error()
            }
        }
    }
}
