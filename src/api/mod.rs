//! JSON API layer.
//!
//! The admin UI itself is HTML; this layer only exposes operational
//! endpoints and the request tracing shared by every route.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - JSON handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
