//! Property repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_entity::property::model::{CreateProperty, UpdateProperty};
use haven_entity::property::{Property, PropertyStatus};

use crate::repositories::storage_error;
use crate::store::{PropertyScope, PropertyStore};

/// Repository for property listing CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find property by id", e))
    }

    async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (owner_id, title, description, kind, price, address, city, \
                                     state, bedrooms, bathrooms, area_sqm, is_premium) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.kind)
        .bind(data.price)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(data.bedrooms)
        .bind(data.bathrooms)
        .bind(data.area_sqm)
        .bind(data.is_premium)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create property", e))
    }

    async fn update(&self, data: &UpdateProperty) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET title = COALESCE($2, title), \
                                   description = COALESCE($3, description), \
                                   price = COALESCE($4, price), \
                                   address = COALESCE($5, address), \
                                   city = COALESCE($6, city), \
                                   state = COALESCE($7, state), \
                                   bedrooms = COALESCE($8, bedrooms), \
                                   bathrooms = COALESCE($9, bathrooms), \
                                   area_sqm = COALESCE($10, area_sqm), \
                                   is_premium = COALESCE($11, is_premium), \
                                   version = version + 1, \
                                   updated_at = NOW() \
             WHERE id = $1 AND status NOT IN ('sold', 'rented') \
             RETURNING *",
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(data.bedrooms)
        .bind(data.bathrooms)
        .bind(data.area_sqm)
        .bind(data.is_premium)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to update property", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete property", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        scope: &PropertyScope,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        let (total, properties) = match scope {
            PropertyScope::All => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| storage_error("Failed to count properties", e))?;

                let properties = sqlx::query_as::<_, Property>(
                    "SELECT * FROM properties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| storage_error("Failed to list properties", e))?;

                (total, properties)
            }
            PropertyScope::OwnedBy(owner) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE owner_id = $1")
                        .bind(owner)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| storage_error("Failed to count properties", e))?;

                let properties = sqlx::query_as::<_, Property>(
                    "SELECT * FROM properties WHERE owner_id = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(owner)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| storage_error("Failed to list properties", e))?;

                (total, properties)
            }
            PropertyScope::ApprovedOnly => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE status = 'approved'")
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| storage_error("Failed to count properties", e))?;

                let properties = sqlx::query_as::<_, Property>(
                    "SELECT * FROM properties WHERE status = 'approved' \
                     ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| storage_error("Failed to list properties", e))?;

                (total, properties)
            }
        };

        Ok(PageResponse::new(
            properties,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn pending(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_error("Failed to count pending properties", e))?;

        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE status = 'pending' \
             ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list pending properties", e))?;

        Ok(PageResponse::new(
            properties,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn approve(&self, id: Uuid, admin_id: Uuid) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET status = 'approved', \
                                   approved_by = $2, \
                                   approved_at = NOW(), \
                                   rejected_at = NULL, \
                                   rejection_reason = NULL, \
                                   version = version + 1, \
                                   updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to approve property", e))
    }

    async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET status = 'rejected', \
                                   rejected_at = NOW(), \
                                   rejection_reason = $2, \
                                   version = version + 1, \
                                   updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to reject property", e))
    }

    async fn opportunities(&self, min_price: i64, limit: i64) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties \
             WHERE status = 'approved' AND (is_premium OR price >= $1) \
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(min_price)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list investment opportunities", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count properties", e))?;
        Ok(count as u64)
    }

    async fn count_by_status(&self) -> AppResult<Vec<(PropertyStatus, i64)>> {
        sqlx::query_as::<_, (PropertyStatus, i64)>(
            "SELECT status, COUNT(*) FROM properties GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to count properties by status", e))
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list recent properties", e))
    }
}
