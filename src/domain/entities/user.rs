//! User accounts managed through the security API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Every role the admin can grant, in display order.
pub const ALL_ROLES: &[&str] = &["ADMIN", "USER"];

/// A user as returned by the security API. Passwords are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// User create/update form. The password is write-only.
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 6, max = 31, message = "Username must be between 6 and 31 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 31, message = "Password must be between 8 and 31 characters"))]
    pub password: String,
    pub roles: Vec<String>,
}

impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("username", &self.username)
            .field("password", &"***")
            .field("roles", &self.roles)
            .finish()
    }
}
