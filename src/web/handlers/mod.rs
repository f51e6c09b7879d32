//! Page and HTMX fragment handlers.

pub mod categories;
pub mod drills;
mod pages;
pub mod users;

pub use pages::{editor_handler, home_handler, modify_handler};
