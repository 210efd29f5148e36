//! Deal repository implementation.
//!
//! Every status transition is compare-and-set on the current status, so
//! two racing callers cannot both move the same deal; the loser sees
//! `None` and reports a failed precondition.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_entity::deal::Deal;
use haven_entity::deal::model::CreateDeal;
use haven_entity::property::PropertyStatus;

use crate::repositories::storage_error;
use crate::store::{DealScope, DealStore};

/// Repository for deal persistence and transitions.
#[derive(Debug, Clone)]
pub struct DealRepository {
    pool: PgPool,
}

impl DealRepository {
    /// Create a new deal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DealStore for DealRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Deal>> {
        sqlx::query_as::<_, Deal>("SELECT * FROM deals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find deal by id", e))
    }

    async fn find_live_for_buyer(
        &self,
        property_id: Uuid,
        buyer_id: Uuid,
    ) -> AppResult<Option<Deal>> {
        sqlx::query_as::<_, Deal>(
            "SELECT * FROM deals WHERE property_id = $1 AND buyer_id = $2 \
             AND status IN ('pending', 'confirmed')",
        )
        .bind(property_id)
        .bind(buyer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to find live deal", e))
    }

    async fn create(&self, data: &CreateDeal) -> AppResult<Deal> {
        sqlx::query_as::<_, Deal>(
            "INSERT INTO deals (property_id, buyer_id, landlord_id, kind, amount, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.property_id)
        .bind(data.buyer_id)
        .bind(data.landlord_id)
        .bind(data.kind)
        .bind(data.amount)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("deals_live_property_buyer_key") =>
            {
                AppError::conflict("You already have an active deal for this property")
            }
            _ => storage_error("Failed to create deal", e),
        })
    }

    async fn list(&self, scope: &DealScope) -> AppResult<Vec<Deal>> {
        let result = match scope {
            DealScope::All => {
                sqlx::query_as::<_, Deal>("SELECT * FROM deals ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
            DealScope::Landlord(landlord) => {
                sqlx::query_as::<_, Deal>(
                    "SELECT * FROM deals WHERE landlord_id = $1 ORDER BY created_at DESC",
                )
                .bind(landlord)
                .fetch_all(&self.pool)
                .await
            }
            DealScope::Buyer(buyer) => {
                sqlx::query_as::<_, Deal>(
                    "SELECT * FROM deals WHERE buyer_id = $1 ORDER BY created_at DESC",
                )
                .bind(buyer)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| storage_error("Failed to list deals", e))
    }

    async fn confirm(&self, id: Uuid) -> AppResult<Option<Deal>> {
        sqlx::query_as::<_, Deal>(
            "UPDATE deals SET status = 'confirmed', \
                              version = version + 1, \
                              updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to confirm deal", e))
    }

    async fn complete(
        &self,
        id: Uuid,
        payment_reference: Option<&str>,
        transaction_id: Option<&str>,
        property_status: Option<PropertyStatus>,
    ) -> AppResult<Option<Deal>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to begin completion transaction", e))?;

        let deal = sqlx::query_as::<_, Deal>(
            "UPDATE deals SET status = 'completed', \
                              payment_status = 'paid', \
                              amount_paid = amount, \
                              payment_reference = COALESCE($2, payment_reference), \
                              transaction_id = COALESCE($3, transaction_id), \
                              closed_at = NOW(), \
                              version = version + 1, \
                              updated_at = NOW() \
             WHERE id = $1 AND status = 'confirmed' \
             RETURNING *",
        )
        .bind(id)
        .bind(payment_reference)
        .bind(transaction_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| storage_error("Failed to complete deal", e))?;

        let Some(deal) = deal else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };

        if let Some(status) = property_status {
            sqlx::query(
                "UPDATE properties SET status = $2, \
                                       version = version + 1, \
                                       updated_at = NOW() \
                 WHERE id = $1",
            )
            .bind(deal.property_id)
            .bind(status)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("Failed to update property for completed deal", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit completion transaction", e))?;

        Ok(Some(deal))
    }

    async fn cancel(&self, id: Uuid, reason: Option<&str>) -> AppResult<Option<Deal>> {
        sqlx::query_as::<_, Deal>(
            "UPDATE deals SET status = 'cancelled', \
                              cancellation_reason = $2, \
                              cancelled_at = NOW(), \
                              version = version + 1, \
                              updated_at = NOW() \
             WHERE id = $1 AND status IN ('pending', 'confirmed') \
             RETURNING *",
        )
        .bind(id)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to cancel deal", e))
    }
}
