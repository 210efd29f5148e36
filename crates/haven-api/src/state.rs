//! Shared application state threaded through every handler.

use std::sync::Arc;

use haven_auth::JwtDecoder;
use haven_core::config::AppConfig;
use haven_database::DatabasePool;
use haven_service::{
    AdminStatsService, AdminUserService, DealService, InvestmentService, NotificationService,
    PropertyService, UserService,
};

/// Application state shared across all routes.
///
/// Cloning is cheap: every field is either an `Arc` or a handle that is
/// itself reference-counted.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────────
    /// Full application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db: DatabasePool,

    // ── Authentication ───────────────────────────────────────────
    /// Verifies bearer tokens presented by clients.
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────────
    /// Registration, login, and profile management.
    pub user_service: Arc<UserService>,
    /// Admin-only user administration.
    pub admin_user_service: Arc<AdminUserService>,
    /// Listing lifecycle and moderation.
    pub property_service: Arc<PropertyService>,
    /// The deal state machine.
    pub deal_service: Arc<DealService>,
    /// The investment ledger.
    pub investment_service: Arc<InvestmentService>,
    /// Per-user notification feed.
    pub notification_service: Arc<NotificationService>,
    /// Platform-wide statistics.
    pub stats_service: Arc<AdminStatsService>,
}
