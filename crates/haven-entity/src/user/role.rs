//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// The set is closed on purpose: access rules match exhaustively over it,
/// so adding a role forces every rule site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Owns and lists properties.
    Landlord,
    /// Rents or buys properties.
    Tenant,
    /// Lists properties on behalf of owners.
    Agent,
    /// Holds investment positions.
    Investor,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Roles that may be chosen at self-registration.
    ///
    /// Admin accounts are provisioned out of band.
    pub fn self_registrable(&self) -> bool {
        match self {
            Self::Admin => false,
            Self::Landlord | Self::Tenant | Self::Agent | Self::Investor => true,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Landlord => "landlord",
            Self::Tenant => "tenant",
            Self::Agent => "agent",
            Self::Investor => "investor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "landlord" => Ok(Self::Landlord),
            "tenant" => Ok(Self::Tenant),
            "agent" => Ok(Self::Agent),
            "investor" => Ok(Self::Investor),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, landlord, tenant, agent, investor"
            ))),
        }
    }
}
