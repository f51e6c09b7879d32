//! Categories and sub-categories, the two tag hierarchies applied to drills.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which of the two parallel tag hierarchies an [`AbstractCategory`] belongs to.
///
/// Both kinds share one wire shape and one set of endpoints; only the
/// resource path and the human-readable labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Category,
    SubCategory,
}

impl CategoryKind {
    /// Resource path segment on the REST backend and in local routes.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::SubCategory => "sub_category",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::SubCategory => "Sub-Category",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::SubCategory => "Sub-Categories",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category or sub-category as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Input data for creating or updating a category.
///
/// Limits mirror the backend's own constraints so that obviously invalid
/// forms are rejected without a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct CategoryDraft {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 511,
        message = "Description must be between 1 and 511 characters"
    ))]
    pub description: String,
}

impl CategoryDraft {
    /// Attaches an id, producing the body sent on update.
    pub fn with_id(self, id: i64) -> AbstractCategory {
        AbstractCategory {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
