//! Application layer services.
//!
//! Services sit between the HTTP handlers and the backend clients. They
//! validate forms locally, sequence multi-call operations and hand every
//! outcome back as a [`crate::domain::BackendResponse`].
//!
//! # Available Services
//!
//! - [`services::drill_service::DrillService`] - Drills, tag assignment and instructions
//! - [`services::category_service::CategoryService`] - Categories and sub-categories
//! - [`services::user_service::UserService`] - User accounts

pub mod services;
