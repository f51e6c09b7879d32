//! Entities exchanged with the REST backend.
//!
//! # Entity Types
//!
//! - [`Drill`] - A drill with its tags, related drills and instructions
//! - [`AbstractCategory`] - Shared shape of categories and sub-categories
//! - [`Instructions`] - Ordered steps describing how to perform a drill
//! - [`User`] - A user account as reported by the security API
//! - [`ErrorMessage`] - Structured error rendered to the admin
//!
//! # Design Pattern
//!
//! Entities returned by the backend are separated from request bodies:
//! - `NewDrill`, `DrillUpdate`, `CategoryDraft`, `UserForm` - Sent to the backend
//! - `Drill`, `AbstractCategory`, `User` - Received from the backend

pub mod category;
pub mod drill;
pub mod error_message;
pub mod instructions;
pub mod user;

pub use category::{AbstractCategory, CategoryDraft, CategoryKind};
pub use drill::{Drill, DrillForm, DrillUpdate, NewDrill, RelatedDrill};
pub use error_message::ErrorMessage;
pub use instructions::Instructions;
pub use user::{ALL_ROLES, User, UserForm};
