//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - reqwest clients for the REST and security APIs

pub mod backend;
