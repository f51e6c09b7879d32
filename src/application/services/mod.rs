//! Business logic services for the application layer.

pub mod category_service;
pub mod drill_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use drill_service::DrillService;
pub use user_service::UserService;
