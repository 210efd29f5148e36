//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user on the Haven platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email address, lowercased and unique.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Platform role.
    pub role: UserRole,
    /// Opaque investor reference, issued to investor accounts.
    pub investor_token: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address (stored lowercased).
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Investor reference for investor accounts.
    pub investor_token: Option<String>,
}

/// Data for updating a user's own profile.
///
/// Role and email are deliberately absent; only an admin may change a
/// role, and email is the login identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// The user ID to update.
    pub id: Uuid,
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}
