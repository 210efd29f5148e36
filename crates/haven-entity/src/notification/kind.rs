//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A buyer submitted a deal on the recipient's property.
    DealSubmitted,
    /// The landlord confirmed the recipient's deal.
    DealConfirmed,
    /// The recipient's deal completed.
    DealCompleted,
    /// Payment settled on the recipient's property.
    PaymentReceived,
    /// A deal the recipient is party to was cancelled.
    DealCancelled,
    /// The recipient's listing went live.
    PropertyApproved,
    /// The recipient's listing was rejected.
    PropertyRejected,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DealSubmitted => "deal_submitted",
            Self::DealConfirmed => "deal_confirmed",
            Self::DealCompleted => "deal_completed",
            Self::PaymentReceived => "payment_received",
            Self::DealCancelled => "deal_cancelled",
            Self::PropertyApproved => "property_approved",
            Self::PropertyRejected => "property_rejected",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
