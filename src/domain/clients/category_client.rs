//! Client trait shared by categories and sub-categories.

use crate::domain::BackendResponse;
use crate::domain::entities::{AbstractCategory, CategoryDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Client interface for one category hierarchy.
///
/// A single implementation serves both hierarchies, selected by
/// [`crate::domain::entities::CategoryKind`] when it is built.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpCategoryClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryClient: Send + Sync {
    async fn list(&self) -> Result<BackendResponse<Vec<AbstractCategory>>, AppError>;

    async fn get(&self, id: i64) -> Result<BackendResponse<AbstractCategory>, AppError>;

    async fn create(
        &self,
        draft: &CategoryDraft,
    ) -> Result<BackendResponse<AbstractCategory>, AppError>;

    async fn update(
        &self,
        category: &AbstractCategory,
    ) -> Result<BackendResponse<AbstractCategory>, AppError>;

    /// Deletes a category. The payload is a confirmation message.
    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError>;
}
