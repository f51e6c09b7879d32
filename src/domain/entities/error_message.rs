//! Structured error shown to the admin.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Title used for every failure that is not a lookup or validation problem.
pub const GENERIC_INTERNAL_ERROR: &str = "Internal Error";
/// Details shown alongside [`GENERIC_INTERNAL_ERROR`].
pub const GENERIC_INTERNAL_ERROR_MESSAGE: &str = "Please try again later.";
/// Title used when the backend reports a missing entity.
pub const NOT_FOUND_ERROR: &str = "Not Found";
/// Title used when a form is rejected before reaching the backend.
pub const VALIDATION_ERROR: &str = "Validation Error";

/// Error payload as returned by the backend on `400 Bad Request`.
///
/// The backend serializes validation failures in exactly this shape, so a
/// `400` body deserializes straight into it and is shown to the admin as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// The fixed "please try again later" error.
    pub fn internal() -> Self {
        Self::new(GENERIC_INTERNAL_ERROR, GENERIC_INTERNAL_ERROR_MESSAGE)
    }

    /// Not-found error naming what was looked up, e.g. `Drill 7`.
    pub fn not_found(subject: impl fmt::Display) -> Self {
        Self::new(NOT_FOUND_ERROR, format!("{subject} does not exist."))
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl From<ValidationErrors> for ErrorMessage {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        details.sort();

        Self::new(VALIDATION_ERROR, details.join("; "))
    }
}
