//! HTTP middleware for request observability.

pub mod tracing;
