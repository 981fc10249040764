//! Site configuration and the commands behind the `medialib` binary.
//!
//! A site file bundles a text format, the editor bound to it, the catalog
//! contents and an optional starting document:
//!
//! ```toml
//! document = "<p>Hello</p>"
//! default_type = "image"
//!
//! [format]
//! id = "basic_html"
//! name = "Basic HTML"
//!
//! [format.filters.media_embed]
//! status = true
//! allowed_media_types = { image = "image" }
//!
//! [editor]
//! format = "basic_html"
//! toolbar = ["drupalMedia", "sourceEditing", "undo", "redo"]
//!
//! [[catalog.types]]
//! type_id = "image"
//! label = "Image"
//!
//! [[catalog.items]]
//! id = "6f1c4d4e-7a5e-4b4e-9f3c-2b1d0c9e8a7f"
//! type_id = "image"
//! name = "Fear is the mind-killer"
//! ```

use anyhow::{bail, Context, Result};
use medialib_editor::{Editor, MediaEmbedPlugin};
use medialib_library::{CatalogFixture, DialogOutcome, EntityCatalog, InMemoryCatalog, SelectionChange};
use medialib_policy::{validate_pair, EditorConfig, FilterFormat};
use medialib_types::{Alignment, ItemId, MediaTypeId, ViewModeId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub format: FilterFormat,
    pub editor: EditorConfig,
    #[serde(default)]
    pub catalog: CatalogFixture,
    /// Initial document source.
    #[serde(default)]
    pub document: String,
    /// Tab the media library opens on.
    #[serde(default)]
    pub default_type: Option<MediaTypeId>,
}

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse site configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid site configuration in {}", path.display()))?;
        debug!(
            path = %path.display(),
            types = config.catalog.types.len(),
            items = config.catalog.items.len(),
            "Loaded site configuration"
        );
        Ok(config)
    }

    fn catalog(&self) -> Arc<dyn EntityCatalog> {
        Arc::new(InMemoryCatalog::from_fixture(self.catalog.clone()))
    }

    /// Builds an editor with the media plugin opening on `default_type`.
    fn editor(&self, default_type: Option<&MediaTypeId>) -> Result<Editor> {
        let catalog = self.catalog();
        let editor = Editor::from_config(
            self.editor.clone(),
            &self.format,
            Arc::clone(&catalog),
            &self.document,
        )?;
        if !self.format.media_embed().status {
            return Ok(editor);
        }
        let mut plugin = MediaEmbedPlugin::from_format(catalog, &self.format)?;
        if let Some(type_id) = default_type.or(self.default_type.as_ref()) {
            plugin = plugin.with_default_type(type_id.clone());
        }
        Ok(editor.with_media(plugin))
    }
}

/// Pairing violations between the configured editor and format.
pub fn validate(config: &SiteConfig) -> Vec<String> {
    validate_pair(&config.editor, &config.format)
}

/// Renders what the media library shows when opened: tabs, counter and
/// the items of the default tab.
pub async fn tabs(config: &SiteConfig) -> Result<String> {
    let editor = config.editor(None)?;
    let session = editor
        .open_media_library()
        .await
        .context("Failed to open the media library")?;

    let mut out = String::new();
    for tab in session.tabs() {
        out.push_str(&tab.text());
        out.push('\n');
    }
    out.push_str(&session.counter_text());
    out.push('\n');
    match session.error() {
        Some(error) => {
            out.push_str("error: ");
            out.push_str(error);
            out.push('\n');
        }
        None => {
            for item in session.items() {
                out.push_str("- ");
                out.push_str(&item.name);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

/// Picks `item` through the media library, inserts it and returns the
/// resulting document source.
pub async fn insert(
    config: &SiteConfig,
    item: ItemId,
    alignment: Option<Alignment>,
    view_mode: Option<ViewModeId>,
) -> Result<String> {
    let target = config
        .catalog
        .items
        .iter()
        .find(|i| i.id == item)
        .with_context(|| format!("Item {item} is not in the catalog"))?;

    let mut editor = config.editor(Some(&target.type_id))?;
    let mut session = editor
        .open_media_library()
        .await
        .context("Failed to open the media library")?;
    if session.active_type() != &target.type_id {
        bail!("Media type '{}' is not offered by the media library", target.type_id);
    }
    if session.click(&item)? != SelectionChange::Selected {
        bail!("Item {item} could not be selected");
    }

    let mut chosen = match session.insert()? {
        DialogOutcome::Chosen(chosen) => chosen,
        DialogOutcome::Cancelled => bail!("Media library closed without a selection"),
    };
    if let Some(view_mode) = view_mode {
        let Some(media) = editor.media() else {
            bail!("The format does not embed media");
        };
        if !media.writes_view_mode() {
            bail!(
                "View mode '{view_mode}' cannot be written: the format offers no view mode choice"
            );
        }
        if !media.allow_list().allows_view_mode(&view_mode) {
            bail!("View mode '{view_mode}' is not allowed by the format");
        }
        chosen.view_mode = view_mode;
    }

    let index = editor.insert_media(&chosen, alignment)?;
    info!(item_id = %item, index, "Inserted item");
    Ok(editor.data())
}
