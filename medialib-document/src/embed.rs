use medialib_types::{Alignment, CatalogItem, ItemId, ViewModeId};
use serde::{Deserialize, Serialize};

/// The only entity type an embed may reference.
pub const ENTITY_TYPE: &str = "media";

/// An embedded reference to a catalog item.
///
/// Atomic leaf of a [`Document`](crate::Document); the document owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmbedNode {
    pub referenced_item_id: ItemId,
    pub alignment: Alignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewModeId>,
}

impl EmbedNode {
    pub fn new(referenced_item_id: ItemId, alignment: Alignment) -> Self {
        Self {
            referenced_item_id,
            alignment,
            view_mode: None,
        }
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewModeId) -> Self {
        self.view_mode = Some(view_mode);
        self
    }

    /// Always [`ENTITY_TYPE`].
    pub fn entity_type(&self) -> &'static str {
        ENTITY_TYPE
    }
}

/// Builds the embed for a chosen catalog item.
///
/// The item's id is copied as-is; alignment defaults to [`Alignment::Center`].
pub fn create_embed(
    item: &CatalogItem,
    alignment: Option<Alignment>,
    view_mode: Option<ViewModeId>,
) -> EmbedNode {
    EmbedNode {
        referenced_item_id: item.id,
        alignment: alignment.unwrap_or_default(),
        view_mode,
    }
}
