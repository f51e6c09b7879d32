//! Web-specific middleware.

pub mod htmx;
