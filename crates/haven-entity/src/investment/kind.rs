//! Investment kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The vehicle an investment position is held through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "investment_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    /// Direct purchase of a listed property.
    PropertyPurchase,
    /// Funding a development project.
    PropertyDevelopment,
    /// Real-estate investment trust units.
    Reit,
    /// Fractional ownership of a single property.
    Fractional,
}

impl InvestmentKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertyPurchase => "property_purchase",
            Self::PropertyDevelopment => "property_development",
            Self::Reit => "reit",
            Self::Fractional => "fractional",
        }
    }
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
