//! Write attempts that a guard judges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a write tries to do to a property.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WriteKind {
    /// Add a property that does not exist yet
    Define,
    /// Replace an existing property
    Overwrite,
    /// Remove a property
    Delete,
}

/// The entry a write targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Name,
    Ordinal,
    CompareTo,
    /// The whole value, as in a handle-level replacement
    Value,
    /// Any other property name
    Other(String),
}

impl Property {
    /// The entries every circular enum exposes.
    pub const BUILT_IN: [Property; 3] = [Property::Name, Property::Ordinal, Property::CompareTo];

    pub fn as_str(&self) -> &str {
        match self {
            Property::Name => "name",
            Property::Ordinal => "ordinal",
            Property::CompareTo => "compareTo",
            Property::Value => "value",
            Property::Other(name) => name,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Property {
    fn from(name: &str) -> Self {
        match name {
            "name" => Property::Name,
            "ordinal" => Property::Ordinal,
            "compareTo" => Property::CompareTo,
            "value" => Property::Value,
            other => Property::Other(other.to_string()),
        }
    }
}

/// A single attempted mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteAttempt {
    pub kind: WriteKind,
    pub property: Property,
}

impl WriteAttempt {
    pub fn new(kind: WriteKind, property: impl Into<Property>) -> Self {
        Self {
            kind,
            property: property.into(),
        }
    }

    pub fn define(property: impl Into<Property>) -> Self {
        Self::new(WriteKind::Define, property)
    }

    pub fn overwrite(property: impl Into<Property>) -> Self {
        Self::new(WriteKind::Overwrite, property)
    }

    pub fn delete(property: impl Into<Property>) -> Self {
        Self::new(WriteKind::Delete, property)
    }
}
