//! URL-encoded form bodies with repeated keys.
//!
//! Checkbox groups and instruction steps submit the same key once per value,
//! which `axum::Form` cannot collect into a list.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
};
use url::form_urlencoded;

use crate::domain::entities::{CategoryDraft, DrillForm, Instructions, UserForm};

/// Decoded form fields in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        Self(form_urlencoded::parse(body).into_owned().collect())
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value submitted for `key`, trimmed, or an empty string.
    pub fn value(&self, key: &str) -> String {
        self.first(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// First non-blank value submitted for `key`.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.value(key)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted for `key`.
    pub fn values(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Every value submitted for `key` that parses as an id.
    pub fn ids(&self, key: &str) -> Vec<i64> {
        self.values(key)
            .iter()
            .filter_map(|v| v.parse().ok())
            .collect()
    }

    pub fn drill_form(&self) -> DrillForm {
        DrillForm {
            name: self.value("name"),
            category_ids: self.ids("category_ids"),
            sub_category_ids: self.ids("sub_category_ids"),
            related_drill_ids: self.ids("related_drill_ids"),
        }
    }

    pub fn instructions(&self) -> Instructions {
        Instructions {
            description: self.value("description"),
            steps: self.values("steps"),
            video_id: self.optional("video_id"),
        }
    }

    pub fn category_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.value("name"),
            description: self.value("description"),
        }
    }

    pub fn user_form(&self) -> UserForm {
        UserForm {
            username: self.value("username"),
            password: self.first("password").unwrap_or_default().to_string(),
            roles: self.values("roles"),
        }
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Ok(Self::parse(&body))
    }
}
