//! The authenticated actor identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use haven_entity::user::UserRole;

use crate::jwt::Claims;

/// The identity an authenticated request acts as.
///
/// Built from validated JWT claims; the platform trusts this as the
/// caller's identity for every access decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user's ID.
    pub id: Uuid,
    /// The acting user's role.
    pub role: UserRole,
    /// Display name, carried for logging and notification text.
    pub name: String,
}

impl Actor {
    /// Build an actor from validated token claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
            name: claims.name.clone(),
        }
    }

    /// Check if the actor is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
