//! User account service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::BackendResponse;
use crate::domain::clients::UserClient;
use crate::domain::entities::{ALL_ROLES, User, UserForm};
use crate::error::AppError;

/// Service for user accounts on the security API.
pub struct UserService {
    client: Arc<dyn UserClient>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(client: Arc<dyn UserClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<BackendResponse<Vec<User>>, AppError> {
        self.client.list().await
    }

    pub async fn get(&self, id: i64) -> Result<BackendResponse<User>, AppError> {
        self.client.get(id).await
    }

    /// Creates a user. Roles outside [`ALL_ROLES`] are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] if the security API cannot be reached.
    pub async fn create(&self, form: UserForm) -> Result<BackendResponse<User>, AppError> {
        let form = known_roles(form);
        if let Err(e) = form.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.client.create(&form).await
    }

    /// Replaces a user's name, password and roles.
    pub async fn update(
        &self,
        id: i64,
        form: UserForm,
    ) -> Result<BackendResponse<User>, AppError> {
        let form = known_roles(form);
        if let Err(e) = form.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.client.update(id, &form).await
    }

    pub async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        self.client.delete(id).await
    }
}

fn known_roles(mut form: UserForm) -> UserForm {
    form.roles.retain(|r| ALL_ROLES.contains(&r.as_str()));
    form
}
