//! Domain layer containing the admin data model and backend contracts.
//!
//! Nothing here is persisted by this application. Every entity is a
//! request-scoped copy of what the REST backend returned or is about to receive.
//!
//! # Architecture
//!
//! - [`entities`] - Drill, category, instructions and user DTOs
//! - [`backend_response`] - [`BackendResponse`] wrapper around every backend call
//! - [`clients`] - Backend client trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on HTTP client or presentation code
//! - Client traits define contracts implemented by [`crate::infrastructure::backend`]
//! - Multi-call orchestration lives in [`crate::application::services`]

pub mod backend_response;
pub mod clients;
pub mod entities;

pub use backend_response::{BackendResponse, InvalidBackendResponse};
