//! View-model assembly shared by the fragment handlers.
//!
//! Backend payloads are flattened into the plain rows templates iterate
//! over: clickable list entries, checkbox choices and status banners. Every
//! list keeps the backend's order.

use url::form_urlencoded;

use crate::domain::BackendResponse;
use crate::domain::entities::{ALL_ROLES, AbstractCategory, CategoryKind, Drill, ErrorMessage, User};

/// Success and error banners shown above a fragment.
///
/// Both may be set at once, e.g. a category was created but assigning it to
/// the checked drills failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: &ErrorMessage) -> Self {
        Self {
            success: None,
            error: Some(error.to_string()),
        }
    }

    /// Success banner if `response` succeeded, its error otherwise.
    pub fn outcome<T>(response: &BackendResponse<T>, success: &str) -> Self {
        match response.error() {
            Some(error) => Self::failed(error),
            None => Self::success(success),
        }
    }

    /// Replaces the error banner, keeping any success message.
    pub fn set_error(&mut self, error: &ErrorMessage) {
        self.error = Some(error.to_string());
    }
}

/// One clickable row of a list window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: String,
    pub endpoint: String,
}

impl ListItem {
    pub fn new(label: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// One checkbox of a multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i64,
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChoice {
    pub role: &'static str,
    pub checked: bool,
}

/// Anything shown as a named row with an id.
pub trait Listed {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
}

impl Listed for Drill {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Listed for AbstractCategory {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Listed for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.username
    }
}

/// Naming and routing for one kind of managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub slug: &'static str,
    pub noun: &'static str,
    pub plural: &'static str,
}

pub const DRILLS: Resource = Resource {
    slug: "drill",
    noun: "Drill",
    plural: "Drills",
};

pub const USERS: Resource = Resource {
    slug: "user",
    noun: "User",
    plural: "Users",
};

impl Resource {
    pub const fn categories(kind: CategoryKind) -> Self {
        Self {
            slug: kind.slug(),
            noun: kind.label(),
            plural: kind.plural(),
        }
    }

    /// Fragment route, e.g. `/htmx/drill/create`.
    pub fn route(&self, action: &str) -> String {
        format!("/htmx/{}/{action}", self.slug)
    }

    /// Fragment route for one item, e.g. `/htmx/drill/view/7`.
    pub fn item_route(&self, action: &str, id: i64) -> String {
        format!("/htmx/{}/{action}/{id}", self.slug)
    }
}

/// What clicking a list row leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    View,
    Modify,
    Delete,
}

impl ListMode {
    pub const fn action(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Modify => "modify",
            Self::Delete => "confirm_delete",
        }
    }

    pub const fn button_text(self) -> &'static str {
        match self {
            Self::View => "Details",
            Self::Modify => "Modify",
            Self::Delete => "Delete",
        }
    }

    pub fn window_title(self, resource: &Resource, count: usize) -> String {
        match self {
            Self::View => format!("Total {}: {count}", resource.plural),
            Self::Modify => format!("Choose {} to Modify", resource.noun),
            Self::Delete => format!("Choose {} to Delete", resource.noun),
        }
    }
}

/// Rows linking each item to its `mode` route, in backend order.
pub fn list_items<T: Listed>(items: &[T], resource: &Resource, mode: ListMode) -> Vec<ListItem> {
    items
        .iter()
        .map(|item| ListItem::new(item.label(), resource.item_route(mode.action(), item.id())))
        .collect()
}

/// Checkboxes for `items`, ticking those whose id is in `checked`.
pub fn choices<T: Listed>(items: &[T], checked: &[i64]) -> Vec<Choice> {
    items
        .iter()
        .map(|item| Choice {
            id: item.id(),
            name: item.label().to_string(),
            checked: checked.contains(&item.id()),
        })
        .collect()
}

/// Checkboxes built from a list response.
///
/// A failed list yields no checkboxes and puts its error on `notice`.
pub fn choices_from<T: Listed>(
    response: &BackendResponse<Vec<T>>,
    checked: &[i64],
    notice: &mut Notice,
) -> Vec<Choice> {
    match (response.payload(), response.error()) {
        (Some(items), _) => choices(items, checked),
        (None, Some(error)) => {
            notice.set_error(error);
            Vec::new()
        }
        (None, None) => Vec::new(),
    }
}

pub fn role_choices(granted: &[String]) -> Vec<RoleChoice> {
    ALL_ROLES
        .iter()
        .map(|&role| RoleChoice {
            role,
            checked: granted.iter().any(|g| g == role),
        })
        .collect()
}

/// Percent-encodes one path segment of a local link.
pub fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends `?key=value` to a local link, encoding the value.
pub fn with_query(path: &str, key: &str, value: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}
