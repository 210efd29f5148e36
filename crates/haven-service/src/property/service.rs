//! Property listing lifecycle: creation, edits, and admin moderation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use haven_auth::access::{AccessEvaluator, Actor};
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_database::store::PropertyStore;
use haven_entity::notification::{NewNotification, NotificationKind};
use haven_entity::property::{CreateProperty, Property, PropertyKind, UpdateProperty};

use crate::notification::NotificationEmitter;

/// Reason recorded when an admin rejects without giving one.
const DEFAULT_REJECTION_REASON: &str = "Does not meet platform standards";

/// Manages property listings.
#[derive(Clone)]
pub struct PropertyService {
    /// Property store.
    properties: Arc<dyn PropertyStore>,
    /// Access evaluator.
    evaluator: Arc<AccessEvaluator>,
    /// Notification sink.
    emitter: Arc<dyn NotificationEmitter>,
}

/// Fields a lister submits for a new listing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListingDraft {
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

impl PropertyService {
    /// Creates a new property service.
    pub fn new(
        properties: Arc<dyn PropertyStore>,
        evaluator: Arc<AccessEvaluator>,
        emitter: Arc<dyn NotificationEmitter>,
    ) -> Self {
        Self {
            properties,
            evaluator,
            emitter,
        }
    }

    /// Creates a pending listing owned by the actor.
    pub async fn create(&self, actor: &Actor, draft: ListingDraft) -> AppResult<Property> {
        self.evaluator.require_lister(actor)?;

        if draft.title.trim().is_empty() {
            return Err(AppError::validation("Property title cannot be empty"));
        }
        if draft.price <= 0 {
            return Err(AppError::validation("Price must be positive"));
        }

        let property = self
            .properties
            .create(&CreateProperty {
                owner_id: actor.id,
                title: draft.title,
                description: draft.description,
                kind: draft.kind,
                price: draft.price,
                address: draft.address,
                city: draft.city,
                state: draft.state,
                bedrooms: draft.bedrooms,
                bathrooms: draft.bathrooms,
                area_sqm: draft.area_sqm,
                is_premium: draft.is_premium,
            })
            .await?;

        info!(
            property_id = %property.id,
            owner_id = %actor.id,
            kind = %property.kind,
            price = property.price,
            "Property listed"
        );

        Ok(property)
    }

    /// Updates a listing's core fields; owner or admin.
    pub async fn update(&self, actor: &Actor, patch: UpdateProperty) -> AppResult<Property> {
        let property = self.load(patch.id).await?;
        self.evaluator.require_property_manage(actor, &property)?;

        if let Some(ref title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Property title cannot be empty"));
            }
        }
        if let Some(price) = patch.price {
            if price <= 0 {
                return Err(AppError::validation("Price must be positive"));
            }
        }

        let updated = self
            .properties
            .update(&patch)
            .await?
            .ok_or_else(|| AppError::precondition("Sold or rented properties cannot be edited"))?;

        info!(property_id = %updated.id, user_id = %actor.id, "Property updated");

        Ok(updated)
    }

    /// Deletes a listing; owner or admin.
    pub async fn delete(&self, actor: &Actor, property_id: Uuid) -> AppResult<()> {
        let property = self.load(property_id).await?;
        self.evaluator.require_property_manage(actor, &property)?;

        self.properties.delete(property_id).await?;

        info!(property_id = %property_id, user_id = %actor.id, "Property deleted");

        Ok(())
    }

    /// Gets a listing. Unapproved listings are hidden from everyone but
    /// the owner and admins; others cannot tell they exist.
    pub async fn get(&self, actor: Option<&Actor>, property_id: Uuid) -> AppResult<Property> {
        let property = self.load(property_id).await?;
        if !self.evaluator.can_view_property(actor, &property) {
            return Err(AppError::not_found("Property not found"));
        }
        Ok(property)
    }

    /// Lists listings visible to the actor, newest first.
    pub async fn list(
        &self,
        actor: Option<&Actor>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        let scope = self.evaluator.property_scope(actor);
        self.properties.list(&scope, &page).await
    }

    /// The moderation queue: pending listings, oldest first. Admin
    /// only.
    pub async fn pending(
        &self,
        actor: &Actor,
        page: PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        self.evaluator.require_admin(actor)?;
        self.properties.pending(&page).await
    }

    /// Approves a pending listing and notifies the owner. Admin only.
    pub async fn approve(&self, actor: &Actor, property_id: Uuid) -> AppResult<Property> {
        self.evaluator.require_admin(actor)?;
        self.load(property_id).await?;

        let approved = self
            .properties
            .approve(property_id, actor.id)
            .await?
            .ok_or_else(|| AppError::precondition("Only pending properties can be approved"))?;

        info!(property_id = %approved.id, admin_id = %actor.id, "Property approved");

        self.emitter
            .emit(vec![NewNotification {
                user_id: approved.owner_id,
                kind: NotificationKind::PropertyApproved,
                title: "Listing approved".to_string(),
                message: format!("Your listing '{}' is now live", approved.title),
                link: Some(format!("/properties/{}", approved.id)),
                property_id: Some(approved.id),
                deal_id: None,
            }])
            .await;

        Ok(approved)
    }

    /// Rejects a pending listing and notifies the owner. Admin only.
    pub async fn reject(
        &self,
        actor: &Actor,
        property_id: Uuid,
        reason: Option<String>,
    ) -> AppResult<Property> {
        self.evaluator.require_admin(actor)?;
        self.load(property_id).await?;

        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

        let rejected = self
            .properties
            .reject(property_id, &reason)
            .await?
            .ok_or_else(|| AppError::precondition("Only pending properties can be rejected"))?;

        info!(
            property_id = %rejected.id,
            admin_id = %actor.id,
            reason = %reason,
            "Property rejected"
        );

        self.emitter
            .emit(vec![NewNotification {
                user_id: rejected.owner_id,
                kind: NotificationKind::PropertyRejected,
                title: "Listing rejected".to_string(),
                message: format!("Your listing '{}' was rejected: {reason}", rejected.title),
                link: Some(format!("/properties/{}", rejected.id)),
                property_id: Some(rejected.id),
                deal_id: None,
            }])
            .await;

        Ok(rejected)
    }

    async fn load(&self, property_id: Uuid) -> AppResult<Property> {
        self.properties
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))
    }
}
