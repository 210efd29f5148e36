//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::PropertyKind;
use super::status::PropertyStatus;

/// A property listed on the marketplace.
///
/// Prices are integer minor units of the platform currency.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: Uuid,
    /// The owning user (landlord or listing agent).
    pub owner_id: Uuid,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Property category.
    pub kind: PropertyKind,
    /// Asking price in minor units.
    pub price: i64,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Number of bedrooms, where applicable.
    pub bedrooms: Option<i32>,
    /// Number of bathrooms, where applicable.
    pub bathrooms: Option<i32>,
    /// Floor or plot area in square metres.
    pub area_sqm: Option<i32>,
    /// Whether the listing is flagged as a premium investment.
    pub is_premium: bool,
    /// Listing lifecycle status.
    pub status: PropertyStatus,
    /// The admin who approved the listing.
    pub approved_by: Option<Uuid>,
    /// When the listing was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// When the listing was rejected.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Why the listing was rejected.
    pub rejection_reason: Option<String>,
    /// Row version, incremented on every update.
    pub version: i32,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Whether the listing is visible to the public.
    pub fn is_publicly_visible(&self) -> bool {
        self.status == PropertyStatus::Approved
    }

    /// Check if the given user owns this listing.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to create a new listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    /// The owning user.
    pub owner_id: Uuid,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Property category.
    pub kind: PropertyKind,
    /// Asking price in minor units.
    pub price: i64,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Number of bedrooms.
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    pub bathrooms: Option<i32>,
    /// Area in square metres.
    pub area_sqm: Option<i32>,
    /// Premium investment flag.
    pub is_premium: bool,
}

/// Data for updating an existing listing's core fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProperty {
    /// The property ID to update.
    pub id: Uuid,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New asking price in minor units.
    pub price: Option<i64>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state or region.
    pub state: Option<String>,
    /// New bedroom count.
    pub bedrooms: Option<i32>,
    /// New bathroom count.
    pub bathrooms: Option<i32>,
    /// New area in square metres.
    pub area_sqm: Option<i32>,
    /// New premium flag.
    pub is_premium: Option<bool>,
}
