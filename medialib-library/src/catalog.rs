//! Entity catalog interface and an in-memory implementation.

use crate::error::{LibraryError, LibraryResult};
use async_trait::async_trait;
use medialib_types::{CatalogItem, ItemId, MediaTypeId, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Source of media types and items.
///
/// Implementations must return items of one type in a stable order
/// (creation order unless the backend defines another).
#[async_trait]
pub trait EntityCatalog: Send + Sync {
    /// All media types known to the catalog.
    async fn types(&self) -> LibraryResult<Vec<TypeDescriptor>>;

    /// Items of one type, in catalog order.
    async fn query_by_type(&self, type_id: &MediaTypeId) -> LibraryResult<Vec<CatalogItem>>;

    /// A single item by ID.
    async fn get(&self, id: &ItemId) -> LibraryResult<CatalogItem>;
}

/// Serializable catalog contents, e.g. a TOML fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Catalog held in memory, items kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogFixture>,
    offline: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: CatalogFixture) -> Self {
        Self {
            state: RwLock::new(fixture),
            offline: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.state.get_mut().types.push(descriptor);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: CatalogItem) -> Self {
        self.state.get_mut().items.push(item);
        self
    }

    /// Appends an item after construction.
    pub async fn insert_item(&self, item: CatalogItem) {
        self.state.write().await.items.push(item);
    }

    /// Simulates the backend going away; every query then fails.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> LibraryResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(LibraryError::CatalogUnavailable(
                "in-memory catalog is offline".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EntityCatalog for InMemoryCatalog {
    async fn types(&self) -> LibraryResult<Vec<TypeDescriptor>> {
        self.check_online()?;
        Ok(self.state.read().await.types.clone())
    }

    async fn query_by_type(&self, type_id: &MediaTypeId) -> LibraryResult<Vec<CatalogItem>> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|item| &item.type_id == type_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &ItemId) -> LibraryResult<CatalogItem> {
        self.check_online()?;
        let state = self.state.read().await;
        state
            .items
            .iter()
            .find(|item| &item.id == id)
            .cloned()
            .ok_or(LibraryError::NotFound(*id))
    }
}
