//! Investment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::kind::InvestmentKind;
use super::status::InvestmentStatus;

/// An investor's position on the platform.
///
/// Amounts are integer minor units. `roi` is a derived value and must
/// only ever be written through [`Investment::derive_roi`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Investment {
    /// Unique investment identifier.
    pub id: Uuid,
    /// The holding investor.
    pub investor_id: Uuid,
    /// The underlying property, if the position targets one.
    pub property_id: Option<Uuid>,
    /// Position title.
    pub title: String,
    /// Investment vehicle.
    pub kind: InvestmentKind,
    /// Amount paid in at opening, in minor units.
    pub initial_amount: i64,
    /// Current valuation in minor units.
    pub current_value: i64,
    /// Return on investment, percent.
    pub roi: f64,
    /// Expected annual return, percent.
    pub expected_annual_return: f64,
    /// Lifecycle status.
    pub status: InvestmentStatus,
    /// Append-only list of recorded payouts.
    pub returns: Json<Vec<InvestmentReturn>>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the position was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Why the position was closed.
    pub close_reason: Option<String>,
    /// Row version, incremented on every update.
    pub version: i32,
    /// When the position was opened.
    pub created_at: DateTime<Utc>,
    /// When the position was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    /// Derive the ROI percentage from paid-in and current amounts.
    ///
    /// This is the single source of truth for the figure; every mutation
    /// that touches `initial_amount` or `current_value` recomputes it
    /// through here. A zero initial amount yields 0.0 rather than a
    /// division error.
    pub fn derive_roi(initial_amount: i64, current_value: i64) -> f64 {
        if initial_amount == 0 {
            return 0.0;
        }
        (current_value - initial_amount) as f64 / initial_amount as f64 * 100.0
    }

    /// Check if the given user holds this position.
    pub fn is_held_by(&self, user_id: Uuid) -> bool {
        self.investor_id == user_id
    }

    /// Sum of all recorded payouts in minor units.
    pub fn total_returns(&self) -> i64 {
        self.returns.iter().map(|r| r.amount).sum()
    }
}

/// A single recorded payout against an investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentReturn {
    /// Payout amount in minor units.
    pub amount: i64,
    /// When the payout was recorded.
    pub date: DateTime<Utc>,
    /// Optional note.
    pub note: Option<String>,
}

/// Data required to open a new investment position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvestment {
    /// The holding investor.
    pub investor_id: Uuid,
    /// The underlying property, if any.
    pub property_id: Option<Uuid>,
    /// Position title.
    pub title: String,
    /// Investment vehicle.
    pub kind: InvestmentKind,
    /// Amount paid in, in minor units.
    pub initial_amount: i64,
    /// Expected annual return, percent.
    pub expected_annual_return: f64,
    /// Free-form notes.
    pub notes: Option<String>,
}
