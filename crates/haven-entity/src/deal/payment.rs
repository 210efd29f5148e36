//! Payment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement state of a deal's payment, tracked independently of the
/// deal status.
///
/// `partial` is representable end to end but no operation currently
/// produces it; instalment support would set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Nothing received.
    Unpaid,
    /// Part of the amount received.
    Partial,
    /// Fully settled.
    Paid,
}

impl PaymentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
