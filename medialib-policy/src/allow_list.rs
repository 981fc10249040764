//! Allow-list of embeddable media types and the tab filter built on it.

use crate::error::{PolicyError, PolicyResult};
use crate::settings::MediaEmbedSettings;
use medialib_types::{MediaTypeId, TypeDescriptor, ViewModeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Validated `media_embed` policy.
///
/// An empty `enabled` set means every media type is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowList {
    enabled: BTreeSet<MediaTypeId>,
    default_view_mode: ViewModeId,
    allowed_view_modes: BTreeSet<ViewModeId>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl AllowList {
    /// Policy allowing every media type with the `default` view mode.
    pub fn allow_all() -> Self {
        Self {
            enabled: BTreeSet::new(),
            default_view_mode: ViewModeId::default_mode(),
            allowed_view_modes: BTreeSet::new(),
        }
    }

    /// Validates filter settings once, at load time.
    ///
    /// Entries with an empty value are unchecked boxes and are ignored.
    pub fn from_settings(settings: &MediaEmbedSettings) -> PolicyResult<Self> {
        let enabled = settings
            .allowed_media_types
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| MediaTypeId::new(k.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let allowed_view_modes = settings
            .allowed_view_modes
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| ViewModeId::new(k.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let default_view_mode = ViewModeId::new(settings.default_view_mode.as_str())?;

        if !allowed_view_modes.is_empty() && !allowed_view_modes.contains(&default_view_mode) {
            return Err(PolicyError::InvalidConfiguration(format!(
                "default view mode '{default_view_mode}' is not among the allowed view modes"
            )));
        }

        Ok(Self {
            enabled,
            default_view_mode,
            allowed_view_modes,
        })
    }

    /// Restricts the list to the given types.
    #[must_use]
    pub fn with_enabled(mut self, types: impl IntoIterator<Item = MediaTypeId>) -> Self {
        self.enabled = types.into_iter().collect();
        self
    }

    pub fn enabled(&self) -> &BTreeSet<MediaTypeId> {
        &self.enabled
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Whether items of `type_id` may be embedded.
    pub fn allows(&self, type_id: &MediaTypeId) -> bool {
        self.enabled.is_empty() || self.enabled.contains(type_id)
    }

    pub fn default_view_mode(&self) -> &ViewModeId {
        &self.default_view_mode
    }

    /// Whether `view_mode` may be written on an embed. An empty set allows any.
    pub fn allows_view_mode(&self, view_mode: &ViewModeId) -> bool {
        self.allowed_view_modes.is_empty() || self.allowed_view_modes.contains(view_mode)
    }

    pub fn allowed_view_modes(&self) -> &BTreeSet<ViewModeId> {
        &self.allowed_view_modes
    }

    /// Produces the ordered types the selection dialog may show.
    ///
    /// Fails when an enabled type is unknown to the catalog.
    pub fn permitted_types(&self, types: &[TypeDescriptor]) -> PolicyResult<PermittedTypes> {
        if let Some(unknown) = self
            .enabled
            .iter()
            .find(|id| !types.iter().any(|t| &t.type_id == *id))
        {
            return Err(PolicyError::InvalidConfiguration(format!(
                "allowed media type '{unknown}' does not exist"
            )));
        }

        let mut permitted: Vec<TypeDescriptor> = types
            .iter()
            .filter(|t| self.allows(&t.type_id))
            .cloned()
            .collect();
        permitted.sort_by(TypeDescriptor::display_order);

        let suppress_navigation = permitted.len() == 1;
        debug!(
            count = permitted.len(),
            suppress_navigation, "Resolved permitted media types"
        );
        Ok(PermittedTypes {
            types: permitted,
            suppress_navigation,
        })
    }
}

/// Ordered media types offered to the selection dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermittedTypes {
    types: Vec<TypeDescriptor>,
    suppress_navigation: bool,
}

impl PermittedTypes {
    /// The types in tab order.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// True when exactly one type is permitted and tabs must not render.
    pub fn suppress_navigation(&self) -> bool {
        self.suppress_navigation
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn get(&self, type_id: &MediaTypeId) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| &t.type_id == type_id)
    }

    pub fn contains(&self, type_id: &MediaTypeId) -> bool {
        self.get(type_id).is_some()
    }

    pub fn first(&self) -> Option<&TypeDescriptor> {
        self.types.first()
    }
}
