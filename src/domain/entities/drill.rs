//! Drill entity and the bodies used to create and update it.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::category::AbstractCategory;
use super::instructions::Instructions;

/// Lightweight reference to another drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedDrill {
    pub id: i64,
    pub name: String,
}

/// A drill as returned by the backend.
///
/// The backend omits or nulls empty collections, both of which are read as
/// empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub categories: Vec<AbstractCategory>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub sub_categories: Vec<AbstractCategory>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub related_drills: Vec<RelatedDrill>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub instructions: Vec<Instructions>,
}

impl Drill {
    /// Finds instructions by their description.
    pub fn instructions_named(&self, description: &str) -> Option<&Instructions> {
        self.instructions
            .iter()
            .find(|i| i.description == description)
    }
}

/// Body of `POST /drill`. The backend only accepts a name on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewDrill {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
}

/// Body of `PUT /drill/id/{id}`.
///
/// Tags and related drills are sent as id lists, while instructions are sent
/// in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct DrillUpdate {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub categories: Vec<i64>,
    pub sub_categories: Vec<i64>,
    pub related_drills: Vec<i64>,
    #[validate(nested)]
    pub instructions: Vec<Instructions>,
}

impl DrillUpdate {
    /// Overwrites name, tags and related drills with what the admin submitted.
    ///
    /// Instructions are left untouched; they have their own forms.
    pub fn apply(&mut self, form: &DrillForm) {
        self.name.clone_from(&form.name);
        self.categories.clone_from(&form.category_ids);
        self.sub_categories.clone_from(&form.sub_category_ids);
        self.related_drills.clone_from(&form.related_drill_ids);
    }
}

impl From<&Drill> for DrillUpdate {
    fn from(drill: &Drill) -> Self {
        Self {
            name: drill.name.clone(),
            categories: drill.categories.iter().map(|c| c.id).collect(),
            sub_categories: drill.sub_categories.iter().map(|c| c.id).collect(),
            related_drills: drill.related_drills.iter().map(|d| d.id).collect(),
            instructions: drill.instructions.clone(),
        }
    }
}

/// Drill create/modify form as submitted by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillForm {
    pub name: String,
    pub category_ids: Vec<i64>,
    pub sub_category_ids: Vec<i64>,
    pub related_drill_ids: Vec<i64>,
}

impl From<&Drill> for DrillForm {
    fn from(drill: &Drill) -> Self {
        Self {
            name: drill.name.clone(),
            category_ids: drill.categories.iter().map(|c| c.id).collect(),
            sub_category_ids: drill.sub_categories.iter().map(|c| c.id).collect(),
            related_drill_ids: drill.related_drills.iter().map(|d| d.id).collect(),
        }
    }
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
