//! Editor fixtures: the `test_format` text format, a two-type catalog and a
//! fully equipped toolbar.

#![allow(dead_code)]

use medialib_editor::{Editor, MediaEmbedPlugin};
use medialib_library::{EntityCatalog, InMemoryCatalog};
use medialib_policy::{EditorConfig, FilterFormat, MediaEmbedSettings, ToolbarItem};
use medialib_types::{CatalogItem, MediaTypeId, TypeDescriptor};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const FORMAT: &str = "test_format";
pub const FEAR: &str = "Fear is the mind-killer";
pub const BARON: &str = "Le baron Vladimir Harkonnen";

pub const FULL_TOOLBAR: &[ToolbarItem] = &[
    ToolbarItem::DrupalMedia,
    ToolbarItem::SourceEditing,
    ToolbarItem::Undo,
    ToolbarItem::Redo,
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn type_id(s: &str) -> MediaTypeId {
    MediaTypeId::new(s).unwrap()
}

pub struct Fixture {
    pub catalog: Arc<InMemoryCatalog>,
    pub fear: CatalogItem,
    pub baron: CatalogItem,
}

impl Fixture {
    pub fn catalog(&self) -> Arc<dyn EntityCatalog> {
        self.catalog.clone()
    }
}

pub fn fixture() -> Fixture {
    let fear = CatalogItem::new(type_id("image"), FEAR).with_thumbnail("public://image-test.png");
    let baron = CatalogItem::new(type_id("arrakis"), BARON);
    let catalog = InMemoryCatalog::new()
        .with_type(TypeDescriptor::new(type_id("image"), "Image"))
        .with_type(TypeDescriptor::new(type_id("arrakis"), "Arrakis"))
        .with_item(fear.clone())
        .with_item(baron.clone());
    Fixture {
        catalog: Arc::new(catalog),
        fear,
        baron,
    }
}

/// `test_format` with the media filter restricted to `types`.
pub fn format(types: &[&str]) -> FilterFormat {
    FilterFormat::new(FORMAT, "Test format").with_media_embed(
        MediaEmbedSettings::enabled().with_allowed_media_types(types.iter().copied()),
    )
}

/// Editor on an empty document with the full toolbar, opening on `image`.
pub fn editor(fx: &Fixture, types: &[&str]) -> Editor {
    let format = format(types);
    let plugin = MediaEmbedPlugin::from_format(fx.catalog(), &format)
        .unwrap()
        .with_default_type(type_id("image"));
    Editor::from_config(EditorConfig::new(FORMAT, FULL_TOOLBAR), &format, fx.catalog(), "")
        .unwrap()
        .with_media(plugin)
}
