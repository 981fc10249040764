//! Shared catalog fixture: an `image` type and an `arrakis` type that sorts
//! before it, one item each.

#![allow(dead_code)]

use medialib_library::InMemoryCatalog;
use medialib_types::{CatalogItem, MediaTypeId, TypeDescriptor};
use std::sync::Arc;

pub const FEAR: &str = "Fear is the mind-killer";
pub const BARON: &str = "Le baron Vladimir Harkonnen";

pub fn type_id(s: &str) -> MediaTypeId {
    MediaTypeId::new(s).unwrap()
}

pub struct Dune {
    pub catalog: Arc<InMemoryCatalog>,
    pub fear: CatalogItem,
    pub baron: CatalogItem,
}

pub fn dune() -> Dune {
    let fear = CatalogItem::new(type_id("image"), FEAR).with_thumbnail("public://image-test.png");
    let baron = CatalogItem::new(type_id("arrakis"), BARON);
    let catalog = InMemoryCatalog::new()
        .with_type(TypeDescriptor::new(type_id("image"), "Image"))
        .with_type(TypeDescriptor::new(type_id("arrakis"), "Arrakis"))
        .with_item(fear.clone())
        .with_item(baron.clone());
    Dune {
        catalog: Arc::new(catalog),
        fear,
        baron,
    }
}
