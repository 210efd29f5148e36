//! Portfolio arithmetic over investment positions.

use haven_entity::investment::Investment;

/// Aggregate figures over a set of positions. All amounts are minor
/// units.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortfolioMetrics {
    /// Number of positions.
    pub count: i64,
    /// Number of positions still active.
    pub active_count: i64,
    /// Sum of paid-in amounts.
    pub total_invested: i64,
    /// Sum of current valuations.
    pub total_current_value: i64,
    /// Pooled ROI over the whole portfolio, percent. 0.0 for an empty
    /// portfolio.
    pub average_roi: f64,
    /// Valuation gain or loss.
    pub profit_loss: i64,
}

/// Tallies a set of positions into portfolio metrics.
pub fn summarize(investments: &[Investment]) -> PortfolioMetrics {
    let mut metrics = PortfolioMetrics {
        count: investments.len() as i64,
        ..PortfolioMetrics::default()
    };

    for investment in investments {
        metrics.total_invested += investment.initial_amount;
        metrics.total_current_value += investment.current_value;
        if investment.status.is_active() {
            metrics.active_count += 1;
        }
    }

    metrics.profit_loss = metrics.total_current_value - metrics.total_invested;
    metrics.average_roi =
        Investment::derive_roi(metrics.total_invested, metrics.total_current_value);

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haven_entity::investment::{InvestmentKind, InvestmentStatus};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn position(initial: i64, current: i64, status: InvestmentStatus) -> Investment {
        let now = Utc::now();
        Investment {
            id: Uuid::new_v4(),
            investor_id: Uuid::new_v4(),
            property_id: None,
            title: "Position".to_string(),
            kind: InvestmentKind::Fractional,
            initial_amount: initial,
            current_value: current,
            roi: Investment::derive_roi(initial, current),
            expected_annual_return: 7.5,
            status,
            returns: Json(vec![]),
            notes: None,
            closed_at: None,
            close_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn summarize_pools_amounts() {
        let metrics = summarize(&[
            position(1_000, 1_200, InvestmentStatus::Active),
            position(3_000, 2_800, InvestmentStatus::Active),
            position(2_000, 2_000, InvestmentStatus::Matured),
        ]);

        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.active_count, 2);
        assert_eq!(metrics.total_invested, 6_000);
        assert_eq!(metrics.total_current_value, 6_000);
        assert_eq!(metrics.profit_loss, 0);
        assert_eq!(metrics.average_roi, 0.0);
    }

    #[test]
    fn summarize_derives_pooled_roi() {
        let metrics = summarize(&[
            position(1_000, 1_500, InvestmentStatus::Active),
            position(1_000, 1_000, InvestmentStatus::Withdrawn),
        ]);

        assert_eq!(metrics.total_invested, 2_000);
        assert_eq!(metrics.total_current_value, 2_500);
        assert_eq!(metrics.average_roi, 25.0);
        assert_eq!(metrics.profit_loss, 500);
    }

    #[test]
    fn summarize_empty_portfolio() {
        let metrics = summarize(&[]);
        assert_eq!(metrics, PortfolioMetrics::default());
        assert_eq!(metrics.average_roi, 0.0);
    }
}
