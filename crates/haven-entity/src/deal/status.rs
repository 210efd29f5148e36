//! Deal status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a deal.
///
/// The graph is `pending -> confirmed -> completed`, with `cancelled`
/// reachable from the two non-terminal states. `completed` and
/// `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "deal_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    /// Submitted by the buyer, awaiting landlord confirmation.
    Pending,
    /// Accepted by the landlord.
    Confirmed,
    /// Closed successfully; payment settled.
    Completed,
    /// Abandoned by either party.
    Cancelled,
}

impl DealStatus {
    /// Whether the deal still occupies the (property, buyer) slot.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether the status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
