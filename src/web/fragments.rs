//! Fragments shared by every resource: list windows and delete confirmations.

use askama::Template;

use super::view_models::{ListItem, ListMode, Listed, Notice, Resource, list_items};
use crate::domain::BackendResponse;

/// A titled list of clickable rows, each loading another fragment.
#[derive(Debug, Template)]
#[template(path = "fragments/view_window_list.html")]
pub struct ViewWindowList {
    pub notice: Notice,
    pub window_title: String,
    pub button_text: String,
    pub items: Vec<ListItem>,
}

impl ViewWindowList {
    /// Builds the list window for `mode` from a list response.
    ///
    /// A failed response renders an empty window titled `Error` with the
    /// error in the banner.
    pub fn from_response<T: Listed>(
        resource: &Resource,
        mode: ListMode,
        response: &BackendResponse<Vec<T>>,
        mut notice: Notice,
    ) -> Self {
        match response.payload() {
            Some(items) => Self {
                notice,
                window_title: mode.window_title(resource, items.len()),
                button_text: mode.button_text().to_string(),
                items: list_items(items, resource, mode),
            },
            None => {
                if let Some(error) = response.error() {
                    notice.set_error(error);
                }
                Self {
                    notice,
                    window_title: "Error".to_string(),
                    button_text: String::new(),
                    items: Vec::new(),
                }
            }
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "fragments/confirm_delete.html")]
pub struct ConfirmDelete {
    pub window_title: String,
    pub id: String,
    pub name: String,
    pub cancel_endpoint: String,
    pub confirm_endpoint: String,
}
