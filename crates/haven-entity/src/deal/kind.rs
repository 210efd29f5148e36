//! Deal kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nature of the transaction a deal represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "deal_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DealKind {
    /// Outright purchase; completion marks the property sold.
    Sale,
    /// Rental; completion marks the property rented.
    Rent,
    /// Long-term lease; completion leaves the listing as-is.
    Lease,
}

impl DealKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
            Self::Lease => "lease",
        }
    }
}

impl fmt::Display for DealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
