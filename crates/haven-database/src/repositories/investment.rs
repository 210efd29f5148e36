//! Investment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_entity::investment::model::CreateInvestment;
use haven_entity::investment::{Investment, InvestmentReturn, InvestmentStatus};

use crate::repositories::storage_error;
use crate::store::{InvestmentScope, InvestmentStore};

/// Repository for investment persistence.
#[derive(Debug, Clone)]
pub struct InvestmentRepository {
    pool: PgPool,
}

impl InvestmentRepository {
    /// Create a new investment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvestmentStore for InvestmentRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Investment>> {
        sqlx::query_as::<_, Investment>("SELECT * FROM investments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find investment by id", e))
    }

    async fn create(&self, data: &CreateInvestment) -> AppResult<Investment> {
        let roi = Investment::derive_roi(data.initial_amount, data.initial_amount);

        sqlx::query_as::<_, Investment>(
            "INSERT INTO investments (investor_id, property_id, title, kind, initial_amount, \
                                      current_value, roi, expected_annual_return, notes) \
             VALUES ($1, $2, $3, $4, $5, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.investor_id)
        .bind(data.property_id)
        .bind(&data.title)
        .bind(data.kind)
        .bind(data.initial_amount)
        .bind(roi)
        .bind(data.expected_annual_return)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create investment", e))
    }

    async fn list(&self, scope: &InvestmentScope) -> AppResult<Vec<Investment>> {
        let result = match scope {
            InvestmentScope::All => {
                sqlx::query_as::<_, Investment>(
                    "SELECT * FROM investments ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
            InvestmentScope::Investor(investor) => {
                sqlx::query_as::<_, Investment>(
                    "SELECT * FROM investments WHERE investor_id = $1 ORDER BY created_at DESC",
                )
                .bind(investor)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| storage_error("Failed to list investments", e))
    }

    async fn record_return(
        &self,
        id: Uuid,
        ret: &InvestmentReturn,
    ) -> AppResult<Option<Investment>> {
        sqlx::query_as::<_, Investment>(
            "UPDATE investments SET returns = returns || $2, \
                                    version = version + 1, \
                                    updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(Json(ret))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to record investment return", e))
    }

    async fn revalue(
        &self,
        id: Uuid,
        current_value: i64,
        roi: f64,
    ) -> AppResult<Option<Investment>> {
        sqlx::query_as::<_, Investment>(
            "UPDATE investments SET current_value = $2, \
                                    roi = $3, \
                                    version = version + 1, \
                                    updated_at = NOW() \
             WHERE id = $1 AND status = 'active' \
             RETURNING *",
        )
        .bind(id)
        .bind(current_value)
        .bind(roi)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to revalue investment", e))
    }

    async fn close(
        &self,
        id: Uuid,
        status: InvestmentStatus,
        reason: Option<&str>,
    ) -> AppResult<Option<Investment>> {
        sqlx::query_as::<_, Investment>(
            "UPDATE investments SET status = $2, \
                                    close_reason = $3, \
                                    closed_at = NOW(), \
                                    version = version + 1, \
                                    updated_at = NOW() \
             WHERE id = $1 AND status = 'active' \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to close investment", e))
    }
}
