//! Investment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an investment position.
///
/// Positions open `active`; the three closed states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "investment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    /// Position is open and revaluable.
    Active,
    /// Reached its planned term.
    Matured,
    /// Exited early by the investor.
    Withdrawn,
    /// Voided by an admin.
    Cancelled,
}

impl InvestmentStatus {
    /// Whether the position can still be mutated.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Matured => "matured",
            Self::Withdrawn => "withdrawn",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
