//! Wrapper around the outcome of a single backend call.

use axum::http::StatusCode;
use thiserror::Error;

use super::entities::ErrorMessage;

/// Rejected [`BackendResponse::new`] input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBackendResponse {
    #[error("backend response must carry a payload or an error, got neither")]
    Empty,
    #[error("backend response must carry a payload or an error, got both")]
    Ambiguous,
}

/// What a backend call produced, together with the status it was reconciled to.
///
/// Holds exactly one of a payload or an [`ErrorMessage`]. The enum makes the
/// "both" and "neither" cases unrepresentable; [`BackendResponse::new`] is the
/// checked entry point for callers holding two optional halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse<T> {
    status: StatusCode,
    outcome: Outcome<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome<T> {
    Payload(T),
    Error(ErrorMessage),
}

impl<T> BackendResponse<T> {
    /// Builds a response from optional halves, enforcing that exactly one is present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBackendResponse::Empty`] if both are `None` and
    /// [`InvalidBackendResponse::Ambiguous`] if both are `Some`.
    pub fn new(
        status: StatusCode,
        payload: Option<T>,
        error: Option<ErrorMessage>,
    ) -> Result<Self, InvalidBackendResponse> {
        match (payload, error) {
            (Some(payload), None) => Ok(Self::success(status, payload)),
            (None, Some(error)) => Ok(Self::failure(status, error)),
            (None, None) => Err(InvalidBackendResponse::Empty),
            (Some(_), Some(_)) => Err(InvalidBackendResponse::Ambiguous),
        }
    }

    pub fn success(status: StatusCode, payload: T) -> Self {
        Self {
            status,
            outcome: Outcome::Payload(payload),
        }
    }

    pub fn failure(status: StatusCode, error: ErrorMessage) -> Self {
        Self {
            status,
            outcome: Outcome::Error(error),
        }
    }

    /// `500` carrying the generic "please try again later" error.
    pub fn internal_error() -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, ErrorMessage::internal())
    }

    /// `404` naming what was looked up.
    pub fn not_found(subject: impl std::fmt::Display) -> Self {
        Self::failure(StatusCode::NOT_FOUND, ErrorMessage::not_found(subject))
    }

    /// `400` carrying a locally produced validation error.
    pub fn invalid(error: impl Into<ErrorMessage>) -> Self {
        Self::failure(StatusCode::BAD_REQUEST, error.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn has_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Payload(payload) => Some(payload),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        match &self.outcome {
            Outcome::Payload(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorMessage> {
        match self.outcome {
            Outcome::Payload(payload) => Ok(payload),
            Outcome::Error(error) => Err(error),
        }
    }

    /// Transforms the payload, keeping status and error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BackendResponse<U> {
        BackendResponse {
            status: self.status,
            outcome: match self.outcome {
                Outcome::Payload(payload) => Outcome::Payload(f(payload)),
                Outcome::Error(error) => Outcome::Error(error),
            },
        }
    }
}
