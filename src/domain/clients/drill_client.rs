//! Client trait for the drill resource.

use crate::domain::BackendResponse;
use crate::domain::entities::{CategoryKind, Drill, DrillUpdate, Instructions, NewDrill};
use crate::error::AppError;
use async_trait::async_trait;

/// Client interface for drill operations on the REST backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpDrillClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`AppError::Backend`] when the backend cannot be
/// reached. Status-level failures are carried inside the [`BackendResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrillClient: Send + Sync {
    /// Lists every drill. An empty backend reply yields an empty list.
    async fn list(&self) -> Result<BackendResponse<Vec<Drill>>, AppError>;

    /// Finds a drill by id.
    async fn get(&self, id: i64) -> Result<BackendResponse<Drill>, AppError>;

    /// Finds a drill by its exact name.
    async fn get_by_name(&self, name: &str) -> Result<BackendResponse<Drill>, AppError>;

    /// Creates a drill with only a name.
    async fn create(&self, drill: &NewDrill) -> Result<BackendResponse<Drill>, AppError>;

    /// Replaces a drill's name, tags, related drills and instructions.
    async fn update(
        &self,
        id: i64,
        drill: &DrillUpdate,
    ) -> Result<BackendResponse<Drill>, AppError>;

    /// Deletes a drill. The payload is a confirmation message.
    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError>;

    /// Tags many drills with one category or sub-category.
    ///
    /// The payload is a confirmation message.
    async fn assign(
        &self,
        kind: CategoryKind,
        category_id: i64,
        drill_ids: &[i64],
    ) -> Result<BackendResponse<String>, AppError>;

    /// Lists the descriptions of a drill's instructions.
    async fn list_instructions(
        &self,
        drill_id: i64,
    ) -> Result<BackendResponse<Vec<String>>, AppError>;

    /// Fetches one set of instructions by its position.
    async fn instructions_details(
        &self,
        drill_id: i64,
        number: i64,
    ) -> Result<BackendResponse<Instructions>, AppError>;
}
