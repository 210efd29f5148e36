//! Investment position management.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_auth::access::{AccessEvaluator, Actor};
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_database::store::{InvestmentStore, PropertyStore};
use haven_entity::investment::{
    CreateInvestment, Investment, InvestmentKind, InvestmentReturn, InvestmentStatus,
};
use haven_entity::property::Property;

use super::ledger::{self, PortfolioMetrics};

/// Approved listings qualify as opportunities when premium or priced at
/// or above this, in minor units.
const OPPORTUNITY_MIN_PRICE: i64 = 100_000_000;

/// How many opportunities the dashboard shows.
const OPPORTUNITY_LIMIT: i64 = 6;

/// Manages investor positions and the portfolio dashboard.
#[derive(Clone)]
pub struct InvestmentService {
    /// Investment store.
    investments: Arc<dyn InvestmentStore>,
    /// Property store, for opportunity picks and target lookups.
    properties: Arc<dyn PropertyStore>,
    /// Access evaluator.
    evaluator: Arc<AccessEvaluator>,
}

/// Request to open a position.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OpenInvestment {
    /// The underlying property, if the position targets one.
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

/// The investor dashboard block.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Portfolio {
    /// Aggregate portfolio figures.
    pub metrics: PortfolioMetrics,
    /// Approved listings worth a look, newest first.
    pub opportunities: Vec<Property>,
}

impl InvestmentService {
    /// Creates a new investment service.
    pub fn new(
        investments: Arc<dyn InvestmentStore>,
        properties: Arc<dyn PropertyStore>,
        evaluator: Arc<AccessEvaluator>,
    ) -> Self {
        Self {
            investments,
            properties,
            evaluator,
        }
    }

    /// Opens an active position; the actor becomes the holder.
    pub async fn open(&self, actor: &Actor, req: OpenInvestment) -> AppResult<Investment> {
        if req.initial_amount <= 0 {
            return Err(AppError::validation("Investment amount must be positive"));
        }
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Investment title cannot be empty"));
        }
        if let Some(property_id) = req.property_id {
            self.properties
                .find_by_id(property_id)
                .await?
                .ok_or_else(|| AppError::not_found("Property not found"))?;
        }

        let investment = self
            .investments
            .create(&CreateInvestment {
                investor_id: actor.id,
                property_id: req.property_id,
                title: req.title,
                kind: req.kind,
                initial_amount: req.initial_amount,
                expected_annual_return: req.expected_annual_return,
                notes: req.notes,
            })
            .await?;

        info!(
            investment_id = %investment.id,
            investor_id = %actor.id,
            kind = %investment.kind,
            initial_amount = investment.initial_amount,
            "Investment opened"
        );

        Ok(investment)
    }

    /// Gets a position the actor holds (or any position for an admin).
    pub async fn get(&self, actor: &Actor, investment_id: Uuid) -> AppResult<Investment> {
        let investment = self.load(investment_id).await?;
        self.evaluator.require_investment_owner(actor, &investment)?;
        Ok(investment)
    }

    /// Lists the actor's positions, newest first, with portfolio
    /// metrics.
    pub async fn list(&self, actor: &Actor) -> AppResult<(Vec<Investment>, PortfolioMetrics)> {
        let scope = self.evaluator.investment_scope(actor);
        let investments = self.investments.list(&scope).await?;
        let metrics = ledger::summarize(&investments);
        Ok((investments, metrics))
    }

    /// Appends a payout to a position's returns ledger. Admin only; the
    /// valuation is untouched.
    pub async fn record_return(
        &self,
        actor: &Actor,
        investment_id: Uuid,
        amount: i64,
        note: Option<String>,
    ) -> AppResult<Investment> {
        self.evaluator.require_admin(actor)?;
        if amount <= 0 {
            return Err(AppError::validation("Return amount must be positive"));
        }

        let ret = InvestmentReturn {
            amount,
            date: Utc::now(),
            note,
        };

        let investment = self
            .investments
            .record_return(investment_id, &ret)
            .await?
            .ok_or_else(|| AppError::not_found("Investment not found"))?;

        info!(
            investment_id = %investment.id,
            amount,
            "Investment return recorded"
        );

        Ok(investment)
    }

    /// Sets a position's current valuation and re-derives its ROI.
    /// Admin only.
    pub async fn revalue(
        &self,
        actor: &Actor,
        investment_id: Uuid,
        current_value: i64,
    ) -> AppResult<Investment> {
        self.evaluator.require_admin(actor)?;
        if current_value < 0 {
            return Err(AppError::validation("Valuation cannot be negative"));
        }

        let investment = self.load(investment_id).await?;
        let roi = Investment::derive_roi(investment.initial_amount, current_value);

        let revalued = self
            .investments
            .revalue(investment_id, current_value, roi)
            .await?
            .ok_or_else(|| AppError::precondition("Only active investments can be revalued"))?;

        info!(
            investment_id = %revalued.id,
            current_value,
            roi,
            "Investment revalued"
        );

        Ok(revalued)
    }

    /// Closes an active position. The holder may withdraw; an admin may
    /// close as any terminal status.
    pub async fn close(
        &self,
        actor: &Actor,
        investment_id: Uuid,
        status: InvestmentStatus,
        reason: Option<&str>,
    ) -> AppResult<Investment> {
        if status == InvestmentStatus::Active {
            return Err(AppError::validation(
                "Close status must be matured, withdrawn, or cancelled",
            ));
        }

        let investment = self.load(investment_id).await?;
        self.evaluator.require_investment_owner(actor, &investment)?;
        if !actor.is_admin() && status != InvestmentStatus::Withdrawn {
            return Err(AppError::authorization(
                "You may only close your investment as withdrawn",
            ));
        }

        let closed = self
            .investments
            .close(investment_id, status, reason)
            .await?
            .ok_or_else(|| AppError::precondition("Only active investments can be closed"))?;

        info!(
            investment_id = %closed.id,
            status = %closed.status,
            closed_by = %actor.id,
            "Investment closed"
        );

        Ok(closed)
    }

    /// Builds the investor dashboard: portfolio metrics plus current
    /// opportunities.
    pub async fn portfolio(&self, actor: &Actor) -> AppResult<Portfolio> {
        let scope = self.evaluator.investment_scope(actor);
        let investments = self.investments.list(&scope).await?;
        let metrics = ledger::summarize(&investments);

        let opportunities = self
            .properties
            .opportunities(OPPORTUNITY_MIN_PRICE, OPPORTUNITY_LIMIT)
            .await?;

        Ok(Portfolio {
            metrics,
            opportunities,
        })
    }

    async fn load(&self, investment_id: Uuid) -> AppResult<Investment> {
        self.investments
            .find_by_id(investment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Investment not found"))
    }
}
