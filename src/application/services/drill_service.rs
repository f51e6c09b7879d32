//! Drill orchestration service.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::warn;
use validator::Validate;

use crate::domain::BackendResponse;
use crate::domain::clients::DrillClient;
use crate::domain::entities::error_message::NOT_FOUND_ERROR;
use crate::domain::entities::{
    CategoryKind, Drill, DrillForm, DrillUpdate, ErrorMessage, Instructions, NewDrill,
};
use crate::error::AppError;

/// Service for drills and their instructions.
///
/// Most operations are single backend calls. The exceptions build on a
/// read-modify-write of the whole drill, because the backend only accepts
/// full updates:
/// - Creation is a name-only `POST` followed by an update with the rest of the form
/// - Instruction edits fetch the drill, edit its instruction list and `PUT` it back
///
/// Instructions are addressed by description so that a concurrent reorder
/// cannot make an edit hit the wrong entry.
pub struct DrillService {
    client: Arc<dyn DrillClient>,
}

impl DrillService {
    /// Creates a new drill service.
    pub fn new(client: Arc<dyn DrillClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<BackendResponse<Vec<Drill>>, AppError> {
        self.client.list().await
    }

    pub async fn get(&self, id: i64) -> Result<BackendResponse<Drill>, AppError> {
        self.client.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        self.client.delete(id).await
    }

    /// Tags `drill_ids` with a category or sub-category.
    pub async fn assign(
        &self,
        kind: CategoryKind,
        category_id: i64,
        drill_ids: &[i64],
    ) -> Result<BackendResponse<String>, AppError> {
        self.client.assign(kind, category_id, drill_ids).await
    }

    /// Creates a drill from the admin's form.
    ///
    /// The backend creates drills by name only, so the tags and related drills
    /// are applied with a follow-up update. If that update fails, the
    /// half-created drill is deleted and the update's error is returned, even
    /// when the delete itself fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] if the create or update call cannot
    /// reach the backend.
    pub async fn create(&self, form: &DrillForm) -> Result<BackendResponse<Drill>, AppError> {
        let new_drill = NewDrill {
            name: form.name.clone(),
        };
        if let Err(e) = new_drill.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        let created = self.client.create(&new_drill).await?;
        let Some(drill) = created.payload() else {
            return Ok(created);
        };

        let mut update = DrillUpdate::from(drill);
        update.apply(form);

        let updated = self.client.update(drill.id, &update).await?;
        if updated.has_error() {
            warn!(drill_id = drill.id, "Drill update failed after creation, rolling back");
            match self.client.delete(drill.id).await {
                Ok(rollback) => {
                    if let Some(error) = rollback.error() {
                        warn!(drill_id = drill.id, %error, "Failed to roll back partially created drill");
                    }
                }
                Err(error) => {
                    warn!(drill_id = drill.id, %error, "Failed to roll back partially created drill");
                }
            }
        }

        Ok(updated)
    }

    /// Overwrites a drill's name, tags and related drills, keeping its instructions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] if the backend cannot be reached.
    pub async fn update(
        &self,
        id: i64,
        form: &DrillForm,
    ) -> Result<BackendResponse<Drill>, AppError> {
        let existing = self.client.get(id).await?;
        let Some(drill) = existing.payload() else {
            return Ok(existing);
        };

        let mut update = DrillUpdate::from(drill);
        update.apply(form);
        if let Err(e) = update.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.client.update(id, &update).await
    }

    /// Looks up one set of instructions by description.
    pub async fn find_instructions(
        &self,
        drill_id: i64,
        description: &str,
    ) -> Result<BackendResponse<(Drill, Instructions)>, AppError> {
        let existing = self.client.get(drill_id).await?;
        let status = existing.status();
        let drill = match existing.into_result() {
            Ok(drill) => drill,
            Err(error) => return Ok(BackendResponse::failure(status, error)),
        };

        Ok(match drill.instructions_named(description).cloned() {
            Some(instructions) => BackendResponse::success(status, (drill, instructions)),
            None => missing_instructions(description),
        })
    }

    /// Appends instructions to a drill.
    pub async fn add_instructions(
        &self,
        drill_id: i64,
        instructions: Instructions,
    ) -> Result<BackendResponse<Drill>, AppError> {
        if let Err(e) = instructions.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.edit_instructions(drill_id, "", |list| {
            list.push(instructions);
            true
        })
        .await
    }

    /// Replaces the instructions currently described as `original_description`.
    pub async fn modify_instructions(
        &self,
        drill_id: i64,
        original_description: &str,
        instructions: Instructions,
    ) -> Result<BackendResponse<Drill>, AppError> {
        if let Err(e) = instructions.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.edit_instructions(drill_id, original_description, |list| {
            match list
                .iter_mut()
                .find(|i| i.description == original_description)
            {
                Some(existing) => {
                    *existing = instructions;
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Removes the instructions described as `description`.
    pub async fn remove_instructions(
        &self,
        drill_id: i64,
        description: &str,
    ) -> Result<BackendResponse<Drill>, AppError> {
        self.edit_instructions(drill_id, description, |list| {
            match list.iter().position(|i| i.description == description) {
                Some(index) => {
                    list.remove(index);
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Fetches a drill, lets `edit` change its instructions, and writes it back.
    ///
    /// `edit` returns `false` when the instructions it targets do not exist,
    /// in which case nothing is written.
    async fn edit_instructions<F>(
        &self,
        drill_id: i64,
        description: &str,
        edit: F,
    ) -> Result<BackendResponse<Drill>, AppError>
    where
        F: FnOnce(&mut Vec<Instructions>) -> bool + Send,
    {
        let existing = self.client.get(drill_id).await?;
        let Some(drill) = existing.payload() else {
            return Ok(existing);
        };

        let mut update = DrillUpdate::from(drill);
        if !edit(&mut update.instructions) {
            return Ok(missing_instructions(description));
        }

        self.client.update(drill_id, &update).await
    }
}

fn missing_instructions<T>(description: &str) -> BackendResponse<T> {
    BackendResponse::failure(
        StatusCode::NOT_FOUND,
        ErrorMessage::new(
            NOT_FOUND_ERROR,
            format!("{description} does not exist, please try again."),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::MockDrillClient;
    use crate::domain::entities::error_message::VALIDATION_ERROR;

    fn drill(id: i64, name: &str) -> Drill {
        Drill {
            id,
            name: name.to_string(),
            categories: vec![],
            sub_categories: vec![],
            related_drills: vec![],
            instructions: vec![instructions("Basic")],
        }
    }

    fn instructions(description: &str) -> Instructions {
        Instructions {
            description: description.to_string(),
            steps: vec!["Step".to_string()],
            video_id: None,
        }
    }

    fn form(name: &str) -> DrillForm {
        DrillForm {
            name: name.to_string(),
            category_ids: vec![1, 2],
            sub_category_ids: vec![3],
            related_drill_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_applies_form_after_creation() {
        let mut mock = MockDrillClient::new();

        mock.expect_create()
            .withf(|d| d.name == "Jab")
            .times(1)
            .returning(|_| Ok(BackendResponse::success(StatusCode::CREATED, drill(5, "Jab"))));
        mock.expect_update()
            .withf(|id, u| *id == 5 && u.categories == vec![1, 2] && u.sub_categories == vec![3])
            .times(1)
            .returning(|_, _| Ok(BackendResponse::success(StatusCode::OK, drill(5, "Jab"))));
        mock.expect_delete().times(0);

        let service = DrillService::new(Arc::new(mock));

        let result = service.create(&form("Jab")).await.unwrap();

        assert_eq!(result.status(), StatusCode::OK);
        assert_eq!(result.payload().unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_create_rolls_back_when_update_fails() {
        let mut mock = MockDrillClient::new();

        mock.expect_create()
            .times(1)
            .returning(|_| Ok(BackendResponse::success(StatusCode::CREATED, drill(5, "Jab"))));
        mock.expect_update()
            .times(1)
            .returning(|_, _| Ok(BackendResponse::internal_error()));
        mock.expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| {
                Ok(BackendResponse::success(
                    StatusCode::NO_CONTENT,
                    "deleted".to_string(),
                ))
            });

        let service = DrillService::new(Arc::new(mock));

        let result = service.create(&form("Jab")).await.unwrap();

        assert!(result.has_error());
        assert_eq!(result.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_keeps_update_error_when_rollback_is_unreachable() {
        let mut mock = MockDrillClient::new();

        mock.expect_create()
            .times(1)
            .returning(|_| Ok(BackendResponse::success(StatusCode::CREATED, drill(5, "Jab"))));
        mock.expect_update().times(1).returning(|_, _| {
            Ok(BackendResponse::failure(
                StatusCode::BAD_REQUEST,
                ErrorMessage::new("Bad Request", "Unknown category"),
            ))
        });
        mock.expect_delete()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset")));

        let service = DrillService::new(Arc::new(mock));

        let result = service.create(&form("Jab")).await.unwrap();

        assert_eq!(result.status(), StatusCode::BAD_REQUEST);
        assert_eq!(result.error().unwrap().message, "Unknown category");
    }

    #[tokio::test]
    async fn test_create_returns_backend_validation_error() {
        let mut mock = MockDrillClient::new();

        mock.expect_create().times(1).returning(|_| {
            Ok(BackendResponse::failure(
                StatusCode::BAD_REQUEST,
                ErrorMessage::new("Bad Request", "Name taken"),
            ))
        });
        mock.expect_update().times(0);

        let service = DrillService::new(Arc::new(mock));

        let result = service.create(&form("Jab")).await.unwrap();

        assert_eq!(result.status(), StatusCode::BAD_REQUEST);
        assert_eq!(result.error().unwrap().message, "Name taken");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_locally() {
        let mut mock = MockDrillClient::new();
        mock.expect_create().times(0);

        let service = DrillService::new(Arc::new(mock));

        let result = service.create(&form("")).await.unwrap();

        assert_eq!(result.status(), StatusCode::BAD_REQUEST);
        assert_eq!(result.error().unwrap().error, VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn test_update_keeps_instructions() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .times(1)
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));
        mock.expect_update()
            .withf(|_, u| u.name == "Cross" && u.instructions.len() == 1)
            .times(1)
            .returning(|id, _| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Cross"))));

        let service = DrillService::new(Arc::new(mock));

        let result = service.update(5, &form("Cross")).await.unwrap();

        assert_eq!(result.payload().unwrap().name, "Cross");
    }

    #[tokio::test]
    async fn test_update_missing_drill_is_passed_through() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .times(1)
            .returning(|_| Ok(BackendResponse::not_found("Drill 9")));
        mock.expect_update().times(0);

        let service = DrillService::new(Arc::new(mock));

        let result = service.update(9, &form("Cross")).await.unwrap();

        assert_eq!(result.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_instructions_appends() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));
        mock.expect_update()
            .withf(|_, u| {
                u.instructions.len() == 2 && u.instructions[1].description == "Advanced"
            })
            .times(1)
            .returning(|id, _| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));

        let service = DrillService::new(Arc::new(mock));

        let result = service
            .add_instructions(5, instructions("Advanced"))
            .await
            .unwrap();

        assert!(!result.has_error());
    }

    #[tokio::test]
    async fn test_modify_instructions_replaces_by_description() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));
        mock.expect_update()
            .withf(|_, u| u.instructions.len() == 1 && u.instructions[0].description == "Renamed")
            .times(1)
            .returning(|id, _| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));

        let service = DrillService::new(Arc::new(mock));

        let result = service
            .modify_instructions(5, "Basic", instructions("Renamed"))
            .await
            .unwrap();

        assert!(!result.has_error());
    }

    #[tokio::test]
    async fn test_modify_unknown_instructions_is_not_found() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));
        mock.expect_update().times(0);

        let service = DrillService::new(Arc::new(mock));

        let result = service
            .modify_instructions(5, "Ghost", instructions("Renamed"))
            .await
            .unwrap();

        assert_eq!(result.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            result.error().unwrap().message,
            "Ghost does not exist, please try again."
        );
    }

    #[tokio::test]
    async fn test_remove_instructions() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));
        mock.expect_update()
            .withf(|_, u| u.instructions.is_empty())
            .times(1)
            .returning(|id, _| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));

        let service = DrillService::new(Arc::new(mock));

        let result = service.remove_instructions(5, "Basic").await.unwrap();

        assert!(!result.has_error());
    }

    #[tokio::test]
    async fn test_add_invalid_instructions_skips_backend() {
        let mut mock = MockDrillClient::new();
        mock.expect_get().times(0);

        let service = DrillService::new(Arc::new(mock));

        let empty = Instructions {
            steps: vec![],
            ..instructions("No steps")
        };
        let result = service.add_instructions(5, empty).await.unwrap();

        assert_eq!(result.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_find_instructions() {
        let mut mock = MockDrillClient::new();

        mock.expect_get()
            .returning(|id| Ok(BackendResponse::success(StatusCode::OK, drill(id, "Jab"))));

        let service = DrillService::new(Arc::new(mock));

        let found = service.find_instructions(5, "Basic").await.unwrap();
        let (drill, instructions) = found.payload().unwrap();
        assert_eq!(drill.name, "Jab");
        assert_eq!(instructions.description, "Basic");

        let missing = service.find_instructions(5, "Ghost").await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
