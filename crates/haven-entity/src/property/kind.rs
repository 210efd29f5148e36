//! Property kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Duplex,
    Land,
    Commercial,
    Office,
}

impl PropertyKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Duplex => "duplex",
            Self::Land => "land",
            Self::Commercial => "commercial",
            Self::Office => "office",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
