//! Deal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::DealKind;
use super::payment::PaymentStatus;
use super::status::DealStatus;

/// A negotiation between a buyer and a property's landlord.
///
/// Amounts are integer minor units. At most one live (pending or
/// confirmed) deal may exist per (property, buyer) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Deal {
    /// Unique deal identifier.
    pub id: Uuid,
    /// The property under negotiation.
    pub property_id: Uuid,
    /// The buying party.
    pub buyer_id: Uuid,
    /// The selling party (the property owner at submission time).
    pub landlord_id: Uuid,
    /// Transaction kind.
    pub kind: DealKind,
    /// Agreed amount in minor units.
    pub amount: i64,
    /// Amount received so far in minor units.
    pub amount_paid: i64,
    /// Lifecycle status.
    pub status: DealStatus,
    /// Payment settlement state.
    pub payment_status: PaymentStatus,
    /// External payment reference, recorded at completion.
    pub payment_reference: Option<String>,
    /// External transaction identifier, recorded at completion.
    pub transaction_id: Option<String>,
    /// Free-form notes from the buyer.
    pub notes: Option<String>,
    /// Why the deal was cancelled.
    pub cancellation_reason: Option<String>,
    /// When the deal completed.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the deal was cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Row version, incremented on every update.
    pub version: i32,
    /// When the deal was submitted.
    pub created_at: DateTime<Utc>,
    /// When the deal was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// Check if the given user is a party to this deal.
    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.buyer_id == user_id || self.landlord_id == user_id
    }

    /// The party opposite the given one; buyer when the caller is not a
    /// party at all.
    pub fn counterparty(&self, user_id: Uuid) -> Uuid {
        if self.buyer_id == user_id {
            self.landlord_id
        } else {
            self.buyer_id
        }
    }
}

/// Data required to open a new deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeal {
    /// The property under negotiation.
    pub property_id: Uuid,
    /// The buying party.
    pub buyer_id: Uuid,
    /// The selling party.
    pub landlord_id: Uuid,
    /// Transaction kind.
    pub kind: DealKind,
    /// Offered amount in minor units.
    pub amount: i64,
    /// Free-form notes from the buyer.
    pub notes: Option<String>,
}
