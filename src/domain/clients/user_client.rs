//! Client trait for user accounts.

use crate::domain::BackendResponse;
use crate::domain::entities::{User, UserForm};
use crate::error::AppError;
use async_trait::async_trait;

/// Client interface for the security API's user resource.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpUserClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserClient: Send + Sync {
    async fn list(&self) -> Result<BackendResponse<Vec<User>>, AppError>;

    async fn get(&self, id: i64) -> Result<BackendResponse<User>, AppError>;

    async fn create(&self, user: &UserForm) -> Result<BackendResponse<User>, AppError>;

    async fn update(&self, id: i64, user: &UserForm) -> Result<BackendResponse<User>, AppError>;

    /// Deletes a user. The payload is a confirmation message.
    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError>;
}
