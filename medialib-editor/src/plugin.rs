use medialib_document::{create_embed, EmbedNode};
use medialib_library::{ChosenItem, DialogSession, EntityCatalog, LibraryResult, SelectionDialog};
use medialib_policy::{AllowList, FilterFormat, PolicyResult};
use medialib_types::{Alignment, MediaTypeId};
use std::sync::Arc;

/// The media embedding plugin: catalog and policy are injected, nothing is
/// looked up globally.
pub struct MediaEmbedPlugin {
    dialog: SelectionDialog,
    default_type: Option<MediaTypeId>,
}

impl MediaEmbedPlugin {
    pub fn new(catalog: Arc<dyn EntityCatalog>, allow_list: AllowList) -> Self {
        Self {
            dialog: SelectionDialog::new(catalog, allow_list),
            default_type: None,
        }
    }

    /// Builds the plugin from a format's `media_embed` filter settings.
    pub fn from_format(catalog: Arc<dyn EntityCatalog>, format: &FilterFormat) -> PolicyResult<Self> {
        let allow_list = AllowList::from_settings(format.media_embed())?;
        Ok(Self::new(catalog, allow_list))
    }

    /// Tab the dialog opens on.
    #[must_use]
    pub fn with_default_type(mut self, type_id: MediaTypeId) -> Self {
        self.default_type = Some(type_id);
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        self.dialog.allow_list()
    }

    pub(crate) async fn open(&self) -> LibraryResult<DialogSession> {
        self.dialog.open(self.default_type.as_ref()).await
    }

    /// Whether embeds carry `data-view-mode`: only when the filter offers
    /// a choice of at least two view modes.
    pub fn writes_view_mode(&self) -> bool {
        self.allow_list().allowed_view_modes().len() > 1
    }

    /// Builds the embed for a chosen item.
    pub(crate) fn embed_for(&self, chosen: &ChosenItem, alignment: Option<Alignment>) -> EmbedNode {
        let view_mode = self.writes_view_mode().then(|| chosen.view_mode.clone());
        create_embed(&chosen.item, alignment, view_mode)
    }
}
