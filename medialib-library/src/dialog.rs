//! Media selection dialog.
//!
//! [`SelectionDialog::open`] resolves the permitted types and the first tab's
//! items before returning a [`DialogSession`], so a session never shows a
//! partial list. The session ends with [`DialogSession::insert`] or
//! [`DialogSession::cancel`]; neither touches a document.

use crate::catalog::EntityCatalog;
use crate::error::{LibraryError, LibraryResult};
use medialib_policy::{AllowList, PermittedTypes};
use medialib_types::{CatalogItem, ItemId, MediaTypeId, ViewModeId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One navigation tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub type_id: MediaTypeId,
    pub label: String,
    pub selected: bool,
}

impl Tab {
    /// Visible link text, e.g. `Show Image media (selected)`.
    pub fn text(&self) -> String {
        if self.selected {
            format!("Show {} media (selected)", self.label)
        } else {
            format!("Show {} media", self.label)
        }
    }

    /// Menu entry class, e.g. `media-library-menu-image`.
    pub fn class(&self) -> String {
        format!("media-library-menu-{}", self.type_id)
    }
}

/// What clicking an item did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// Another item is already selected; the click was ignored.
    LimitReached,
}

/// Item picked by the user, with the view mode to embed it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenItem {
    pub item: CatalogItem,
    pub view_mode: ViewModeId,
}

/// Terminal result of a dialog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Chosen(ChosenItem),
    Cancelled,
}

#[derive(Debug, Clone)]
enum Listing {
    Loaded(Vec<CatalogItem>),
    Failed(String),
}

/// Opens selection dialogs over a catalog, constrained by an allow-list.
pub struct SelectionDialog {
    catalog: Arc<dyn EntityCatalog>,
    allow_list: AllowList,
}

impl SelectionDialog {
    pub fn new(catalog: Arc<dyn EntityCatalog>, allow_list: AllowList) -> Self {
        Self {
            catalog,
            allow_list,
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Resolves the permitted types and opens a session on `default_type`
    /// (or the first permitted type).
    ///
    /// Fails with a policy error when the allow-list names unknown types, and
    /// with [`LibraryError::CatalogUnavailable`] when the types cannot be
    /// listed. A failed item query only puts the session in its error state.
    pub async fn open(&self, default_type: Option<&MediaTypeId>) -> LibraryResult<DialogSession> {
        let types = self.catalog.types().await?;
        let permitted = self.allow_list.permitted_types(&types)?;
        DialogSession::open(
            Arc::clone(&self.catalog),
            permitted,
            self.allow_list.default_view_mode().clone(),
            default_type,
        )
        .await
    }
}

/// Transient state of one open dialog.
pub struct DialogSession {
    catalog: Arc<dyn EntityCatalog>,
    permitted: PermittedTypes,
    view_mode: ViewModeId,
    active: MediaTypeId,
    listing: Listing,
    selected: Option<ItemId>,
}

impl fmt::Debug for DialogSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogSession")
            .field("permitted", &self.permitted)
            .field("view_mode", &self.view_mode)
            .field("active", &self.active)
            .field("listing", &self.listing)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl DialogSession {
    /// Opens a session over already-resolved types.
    pub async fn open(
        catalog: Arc<dyn EntityCatalog>,
        permitted: PermittedTypes,
        view_mode: ViewModeId,
        default_type: Option<&MediaTypeId>,
    ) -> LibraryResult<Self> {
        let first = permitted.first().ok_or(LibraryError::NoMediaTypes)?;
        let active = match default_type {
            Some(t) if permitted.contains(t) => t.clone(),
            Some(t) => {
                warn!(default_type = %t, "Default media type not permitted, using first tab");
                first.type_id.clone()
            }
            None => first.type_id.clone(),
        };

        let listing = load_listing(catalog.as_ref(), &active).await;
        info!(
            types = permitted.len(),
            active = %active,
            tabs = !permitted.suppress_navigation(),
            "Opened media library"
        );
        Ok(Self {
            catalog,
            permitted,
            view_mode,
            active,
            listing,
            selected: None,
        })
    }

    /// Navigation tabs in display order. Empty when navigation is suppressed.
    pub fn tabs(&self) -> Vec<Tab> {
        if self.permitted.suppress_navigation() {
            return Vec::new();
        }
        self.permitted
            .types()
            .iter()
            .map(|t| Tab {
                type_id: t.type_id.clone(),
                label: t.label.clone(),
                selected: t.type_id == self.active,
            })
            .collect()
    }

    pub fn active_type(&self) -> &MediaTypeId {
        &self.active
    }

    /// Items of the active tab. Empty when the catalog query failed.
    pub fn items(&self) -> &[CatalogItem] {
        match &self.listing {
            Listing::Loaded(items) => items,
            Listing::Failed(_) => &[],
        }
    }

    /// Error shown in place of the item list, if the query failed.
    pub fn error(&self) -> Option<&str> {
        match &self.listing {
            Listing::Loaded(_) => None,
            Listing::Failed(message) => Some(message.as_str()),
        }
    }

    pub fn selected_count(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// `"{n} of {total} item(s) selected"` for the active tab.
    pub fn counter_text(&self) -> String {
        let total = self.items().len();
        let noun = if total > 1 { "items" } else { "item" };
        format!("{} of {} {} selected", self.selected_count(), total, noun)
    }

    /// Whether `Insert selected` is enabled.
    pub fn can_insert(&self) -> bool {
        self.selected_count() == 1
    }

    /// Toggles selection of an item in the active tab.
    pub fn click(&mut self, id: &ItemId) -> LibraryResult<SelectionChange> {
        if !self.items().iter().any(|item| &item.id == id) {
            return Err(LibraryError::NotFound(*id));
        }
        let change = match self.selected {
            Some(current) if current == *id => {
                self.selected = None;
                SelectionChange::Deselected
            }
            Some(_) => SelectionChange::LimitReached,
            None => {
                self.selected = Some(*id);
                SelectionChange::Selected
            }
        };
        debug!(item_id = %id, ?change, "Media item clicked");
        Ok(change)
    }

    /// Switches to another tab, reloading its items and clearing the selection.
    pub async fn switch_tab(&mut self, type_id: &MediaTypeId) -> LibraryResult<()> {
        if self.permitted.suppress_navigation() {
            return Err(LibraryError::NavigationSuppressed);
        }
        if !self.permitted.contains(type_id) {
            return Err(LibraryError::InvalidTab(type_id.clone()));
        }
        self.listing = load_listing(self.catalog.as_ref(), type_id).await;
        self.active = type_id.clone();
        self.selected = None;
        Ok(())
    }

    /// Presses `Insert selected`, closing the dialog.
    pub fn insert(self) -> LibraryResult<DialogOutcome> {
        let id = self.selected.ok_or(LibraryError::NothingSelected)?;
        let item = self
            .items()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(LibraryError::NotFound(id))?;
        info!(item_id = %item.id, media_type = %item.type_id, "Media item chosen");
        Ok(DialogOutcome::Chosen(ChosenItem {
            item,
            view_mode: self.view_mode,
        }))
    }

    /// Closes the dialog without choosing anything.
    pub fn cancel(self) -> DialogOutcome {
        debug!(active = %self.active, "Media library cancelled");
        DialogOutcome::Cancelled
    }
}

async fn load_listing(catalog: &dyn EntityCatalog, type_id: &MediaTypeId) -> Listing {
    match catalog.query_by_type(type_id).await {
        Ok(items) => Listing::Loaded(items),
        Err(e) => {
            warn!(media_type = %type_id, "Media library query failed: {}", e);
            Listing::Failed(e.to_string())
        }
    }
}
