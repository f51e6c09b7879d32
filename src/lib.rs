//! # Defense Drill Admin
//!
//! Admin UI for the Defense Drill REST API, built with Axum, Askama and HTMX.
//!
//! The service owns no data. Every page and fragment is a pass-through: call
//! the REST backend, reconcile its reply into a [`domain::BackendResponse`]
//! and render the result.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, `BackendResponse` and backend client traits
//! - **Application Layer** ([`application`]) - Multi-call orchestration and form validation
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients and response reconciliation
//! - **API Layer** ([`api`]) - JSON health endpoint and request tracing
//! - **Web Layer** ([`web`]) - Pages, HTMX fragments and templates
//!
//! ## Quick Start
//!
//! ```bash
//! export REST_API_URL="http://localhost:5433"
//!
//! # Check that every backend answers
//! cargo run -- check
//!
//! # Start the admin UI
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CategoryService, DrillService, UserService};
    pub use crate::domain::BackendResponse;
    pub use crate::domain::entities::{AbstractCategory, Drill, ErrorMessage, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
