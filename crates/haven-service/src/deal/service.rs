//! Deal workflow orchestration.
//!
//! Authorization comes from the access evaluator, transition rules from
//! [`super::machine`], and atomicity from the store's compare-and-set
//! updates. Notifications are emitted only after a transition commits.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use haven_auth::access::{AccessEvaluator, Actor};
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_database::store::{DealStore, PropertyStore};
use haven_entity::deal::{Deal, DealKind, DealStatus};
use haven_entity::property::Property;

use super::machine;
use crate::notification::NotificationEmitter;

/// Orchestrates the deal lifecycle.
#[derive(Clone)]
pub struct DealService {
    /// Deal store.
    deals: Arc<dyn DealStore>,
    /// Property store, for listing lookups at submission.
    properties: Arc<dyn PropertyStore>,
    /// Access evaluator.
    evaluator: Arc<AccessEvaluator>,
    /// Notification sink.
    emitter: Arc<dyn NotificationEmitter>,
}

/// Request to open a deal on a listing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OpenDeal {
    /// The listing to negotiate on.
    pub property_id: Uuid,
    /// Transaction kind.
    pub kind: DealKind,
    /// Offered amount in minor units.
    pub amount: i64,
    /// Free-form notes to the landlord.
    pub notes: Option<String>,
}

/// Aggregate figures over a deal listing.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DealSummary {
    /// All visible deals.
    pub total: i64,
    /// Deals awaiting confirmation.
    pub pending: i64,
    /// Confirmed deals awaiting completion.
    pub confirmed: i64,
    /// Completed deals.
    pub completed: i64,
    /// Cancelled deals.
    pub cancelled: i64,
    /// Sum of `amount` over completed deals, in minor units.
    pub completed_volume: i64,
}

impl DealSummary {
    /// Tallies a deal listing.
    pub fn from_deals(deals: &[Deal]) -> Self {
        let mut summary = Self {
            total: deals.len() as i64,
            ..Self::default()
        };
        for deal in deals {
            match deal.status {
                DealStatus::Pending => summary.pending += 1,
                DealStatus::Confirmed => summary.confirmed += 1,
                DealStatus::Completed => {
                    summary.completed += 1;
                    summary.completed_volume += deal.amount;
                }
                DealStatus::Cancelled => summary.cancelled += 1,
            }
        }
        summary
    }
}

impl DealService {
    /// Creates a new deal service.
    pub fn new(
        deals: Arc<dyn DealStore>,
        properties: Arc<dyn PropertyStore>,
        evaluator: Arc<AccessEvaluator>,
        emitter: Arc<dyn NotificationEmitter>,
    ) -> Self {
        Self {
            deals,
            properties,
            evaluator,
            emitter,
        }
    }

    /// Opens a pending deal on an approved listing; the actor becomes
    /// the buyer.
    pub async fn open(&self, actor: &Actor, req: OpenDeal) -> AppResult<Deal> {
        let property = self.load_property(req.property_id).await?;

        let create = machine::open(&property, actor.id, req.kind, req.amount, req.notes)?;

        // The partial unique index closes the race this pre-check
        // leaves open.
        if self
            .deals
            .find_live_for_buyer(property.id, actor.id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "You already have an active deal for this property",
            ));
        }

        let deal = self.deals.create(&create).await?;

        info!(
            deal_id = %deal.id,
            property_id = %property.id,
            buyer_id = %actor.id,
            kind = %deal.kind,
            amount = deal.amount,
            "Deal opened"
        );

        self.emitter
            .emit(vec![machine::submitted(&deal, &actor.name, &property.title)])
            .await;

        Ok(deal)
    }

    /// Gets a deal the actor is a party to (or any deal for an admin).
    pub async fn get(&self, actor: &Actor, deal_id: Uuid) -> AppResult<Deal> {
        let deal = self.load_deal(deal_id).await?;
        self.evaluator.require_deal_party(actor, &deal)?;
        Ok(deal)
    }

    /// Lists the actor's visible deals, newest first, with summary
    /// figures.
    pub async fn list(&self, actor: &Actor) -> AppResult<(Vec<Deal>, DealSummary)> {
        let scope = self.evaluator.deal_scope(actor)?;
        let deals = self.deals.list(&scope).await?;
        let summary = DealSummary::from_deals(&deals);
        Ok((deals, summary))
    }

    /// Confirms a pending deal. Only the landlord named on the deal may
    /// confirm, admins included.
    pub async fn confirm(&self, actor: &Actor, deal_id: Uuid) -> AppResult<Deal> {
        let deal = self.load_deal(deal_id).await?;
        self.evaluator.require_deal_confirmer(actor, &deal)?;
        let transition = machine::confirm(&deal)?;

        let confirmed = self
            .deals
            .confirm(deal_id)
            .await?
            .ok_or_else(|| AppError::precondition("Deal is no longer pending"))?;

        info!(deal_id = %confirmed.id, landlord_id = %actor.id, "Deal confirmed");

        self.emitter.emit(transition.notifications).await;

        Ok(confirmed)
    }

    /// Completes a confirmed deal, settling payment and closing the
    /// listing for sales and rents.
    pub async fn complete(
        &self,
        actor: &Actor,
        deal_id: Uuid,
        payment_reference: Option<&str>,
        transaction_id: Option<&str>,
    ) -> AppResult<Deal> {
        let deal = self.load_deal(deal_id).await?;
        self.evaluator.require_deal_party(actor, &deal)?;
        let transition = machine::complete(&deal)?;

        let completed = self
            .deals
            .complete(
                deal_id,
                payment_reference,
                transaction_id,
                transition.property_status,
            )
            .await?
            .ok_or_else(|| AppError::precondition("Deal is no longer confirmed"))?;

        info!(
            deal_id = %completed.id,
            property_id = %completed.property_id,
            amount = completed.amount,
            property_status = ?transition.property_status,
            "Deal completed"
        );

        self.emitter.emit(transition.notifications).await;

        Ok(completed)
    }

    /// Cancels a live deal.
    pub async fn cancel(
        &self,
        actor: &Actor,
        deal_id: Uuid,
        reason: Option<&str>,
    ) -> AppResult<Deal> {
        let deal = self.load_deal(deal_id).await?;
        self.evaluator.require_deal_party(actor, &deal)?;
        let transition = machine::cancel(&deal, actor.id, reason)?;

        let cancelled = self
            .deals
            .cancel(deal_id, reason)
            .await?
            .ok_or_else(|| AppError::precondition("Deal can no longer be cancelled"))?;

        info!(
            deal_id = %cancelled.id,
            cancelled_by = %actor.id,
            reason = reason.unwrap_or("none"),
            "Deal cancelled"
        );

        self.emitter.emit(transition.notifications).await;

        Ok(cancelled)
    }

    async fn load_deal(&self, deal_id: Uuid) -> AppResult<Deal> {
        self.deals
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deal not found"))
    }

    async fn load_property(&self, property_id: Uuid) -> AppResult<Property> {
        self.properties
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))
    }
}
