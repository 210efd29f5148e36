//! Property listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a property listing.
///
/// Listings start `pending` and become publicly visible only once an
/// admin approves them. `sold` and `rented` are set by a completed deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Awaiting admin review.
    Pending,
    /// Publicly listed.
    Approved,
    /// Rejected by an admin.
    Rejected,
    /// Taken off the market by a completed sale.
    Sold,
    /// Taken off the market by a completed rental.
    Rented,
}

impl PropertyStatus {
    /// Whether the listing is off the market.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Sold | Self::Rented)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Sold => "sold",
            Self::Rented => "rented",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
