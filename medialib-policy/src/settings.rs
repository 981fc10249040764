//! Filter format configuration, read from TOML.
//!
//! The shape mirrors a text format with a `media_embed` filter:
//!
//! ```toml
//! id = "test_format"
//! name = "Test format"
//!
//! [filters.media_embed]
//! status = true
//! default_view_mode = "view_mode_1"
//! allowed_media_types = { image = "image" }
//! allowed_view_modes = { view_mode_1 = "view_mode_1", view_mode_2 = "view_mode_2" }
//! ```

use crate::error::{PolicyError, PolicyResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Settings of the `media_embed` filter.
///
/// `allowed_media_types` and `allowed_view_modes` are checkbox maps: a key
/// counts as enabled when its value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEmbedSettings {
    #[serde(default)]
    pub status: bool,
    #[serde(default = "default_view_mode")]
    pub default_view_mode: String,
    #[serde(default)]
    pub allowed_media_types: BTreeMap<String, String>,
    #[serde(default)]
    pub allowed_view_modes: BTreeMap<String, String>,
}

fn default_view_mode() -> String {
    "default".to_string()
}

impl Default for MediaEmbedSettings {
    fn default() -> Self {
        Self {
            status: false,
            default_view_mode: default_view_mode(),
            allowed_media_types: BTreeMap::new(),
            allowed_view_modes: BTreeMap::new(),
        }
    }
}

impl MediaEmbedSettings {
    /// Enabled filter with no restrictions.
    pub fn enabled() -> Self {
        Self {
            status: true,
            ..Default::default()
        }
    }

    /// Restricts the filter to the given media types.
    #[must_use]
    pub fn with_allowed_media_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_media_types = types
            .into_iter()
            .map(|t| {
                let t = t.into();
                (t.clone(), t)
            })
            .collect();
        self
    }

    /// Sets the default view mode and the allowed view modes.
    #[must_use]
    pub fn with_view_modes<I, S>(mut self, default: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_view_mode = default.to_string();
        self.allowed_view_modes = allowed
            .into_iter()
            .map(|v| {
                let v = v.into();
                (v.clone(), v)
            })
            .collect();
        self
    }
}

/// Filters configured on a text format. Only `media_embed` is understood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub media_embed: MediaEmbedSettings,
}

/// A text format and its filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFormat {
    #[serde(default = "default_format_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub filters: Filters,
}

fn default_format_id() -> String {
    "plain_text".to_string()
}

impl Default for FilterFormat {
    fn default() -> Self {
        Self {
            id: default_format_id(),
            name: String::new(),
            filters: Filters::default(),
        }
    }
}

impl FilterFormat {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            filters: Filters::default(),
        }
    }

    /// Replaces the `media_embed` filter configuration.
    #[must_use]
    pub fn with_media_embed(mut self, settings: MediaEmbedSettings) -> Self {
        self.filters.media_embed = settings;
        self
    }

    /// Returns the `media_embed` filter configuration.
    pub fn media_embed(&self) -> &MediaEmbedSettings {
        &self.filters.media_embed
    }

    /// Parses a format from TOML text.
    pub fn from_toml_str(contents: &str) -> PolicyResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads a format from an explicit path.
    ///
    /// A missing file yields the default format (media embedding disabled).
    pub fn load_from(path: &Path) -> PolicyResult<Self> {
        if !path.exists() {
            info!("No filter format found at {:?}, media embedding disabled", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let format = Self::from_toml_str(&contents)?;
        debug!(format = %format.id, "Loaded filter format from {:?}", path);
        Ok(format)
    }
}
