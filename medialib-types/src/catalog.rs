use crate::{ItemId, MediaTypeId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A selectable item owned by the entity catalog.
///
/// Items are immutable once created; the catalog hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub type_id: MediaTypeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl CatalogItem {
    /// Creates an item with a freshly generated ID.
    pub fn new(type_id: MediaTypeId, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            type_id,
            name: name.into(),
            thumbnail: None,
        }
    }

    /// Sets the thumbnail reference.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

/// Describes one catalog partition (a media type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub type_id: MediaTypeId,
    pub label: String,
    /// Overrides the label as ordering key when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
}

impl TypeDescriptor {
    pub fn new(type_id: MediaTypeId, label: impl Into<String>) -> Self {
        Self {
            type_id,
            label: label.into(),
            sort_key: None,
        }
    }

    #[must_use]
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// The key used to order tabs: the explicit sort key, else the label.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        self.sort_key.as_deref().unwrap_or(&self.label)
    }

    /// Tab ordering: by sort key, ties broken by type ID.
    #[must_use]
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(other.sort_key())
            .then_with(|| self.type_id.cmp(&other.type_id))
    }
}
