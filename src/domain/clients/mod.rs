//! Backend client trait definitions for the domain layer.
//!
//! Each trait covers one backend resource. Every method reconciles the
//! backend's reply into a [`crate::domain::BackendResponse`]; only transport
//! failures surface as `Err`.
//!
//! # Architecture
//!
//! - Traits define the contract for backend operations
//! - Implementations live in `crate::infrastructure::backend`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Clients
//!
//! - [`DrillClient`] - Drills, their tag assignments and instructions
//! - [`CategoryClient`] - Categories and sub-categories
//! - [`UserClient`] - User accounts on the security API

pub mod category_client;
pub mod drill_client;
pub mod user_client;

pub use category_client::CategoryClient;
pub use drill_client::DrillClient;
pub use user_client::UserClient;

#[cfg(test)]
pub use category_client::MockCategoryClient;
#[cfg(test)]
pub use drill_client::MockDrillClient;
#[cfg(test)]
pub use user_client::MockUserClient;
