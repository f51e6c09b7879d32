//! How-to instructions attached to a drill.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One set of instructions for a drill.
///
/// Instructions are addressed by their `description` rather than their index,
/// so concurrent edits that reorder the list cannot target the wrong entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Instructions {
    #[validate(length(
        min = 1,
        max = 511,
        message = "Description must be between 1 and 511 characters"
    ))]
    pub description: String,
    #[validate(length(min = 1, message = "At least one step is required"))]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl Instructions {
    pub fn first_step(&self) -> &str {
        self.steps.first().map(String::as_str).unwrap_or_default()
    }

    pub fn steps_after_first(&self) -> &[String] {
        self.steps.get(1..).unwrap_or_default()
    }
}
