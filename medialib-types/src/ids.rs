//! Identifier types used throughout MediaLib.
//!
//! Catalog items are keyed by UUID; media types and view modes by
//! machine names (`[a-z0-9_]+`).

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Catalog item key.
///
/// An embed references its item by this value alone: it is written into
/// `data-entity-uuid` in lower-case hyphenated form and read back from it,
/// so an item keeps its id for as long as documents point at it. Upper-case
/// input parses to the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Fresh id for a newly created catalog item.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Reads the id back from a `data-entity-uuid` value.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_machine_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

macro_rules! machine_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates and wraps a machine name.
            pub fn new(name: impl Into<String>) -> Result<Self, Error> {
                let name = name.into();
                if is_machine_name(&name) {
                    Ok(Self(name))
                } else {
                    Err(Error::InvalidMachineName(name))
                }
            }

            /// Returns the machine name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

machine_name!(
    /// Machine name of a media type (the catalog partition, e.g. `image`).
    MediaTypeId
);

machine_name!(
    /// Machine name of a view mode used to render an embedded item.
    ViewModeId
);

impl ViewModeId {
    /// The `default` view mode every entity type has.
    #[must_use]
    pub fn default_mode() -> Self {
        Self("default".to_string())
    }
}

impl Default for ViewModeId {
    fn default() -> Self {
        Self::default_mode()
    }
}
