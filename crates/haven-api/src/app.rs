//! Application builder: wires repositories, services, router, and
//! middleware into a running Axum server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use haven_auth::{AccessEvaluator, JwtDecoder, JwtEncoder, PasswordHasher};
use haven_core::config::AppConfig;
use haven_core::error::AppError;
use haven_database::DatabasePool;
use haven_database::repositories::{
    DealRepository, InvestmentRepository, NotificationRepository, PropertyRepository,
    UserRepository,
};
use haven_database::store::{
    DealStore, InvestmentStore, NotificationStore, PropertyStore, UserStore,
};
use haven_service::{
    AdminStatsService, AdminUserService, DealService, InvestmentService, NotificationEmitter,
    NotificationService, PropertyService, StoreEmitter, UserService,
};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let timeout = TimeoutLayer::new(Duration::from_secs(
        state.config.server.request_timeout_seconds,
    ));

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
}

/// Builds the full application state from a configuration and pool.
///
/// All wiring lives here so tests can assemble the exact production
/// object graph against their own pool.
pub fn build_state(config: &AppConfig, db: DatabasePool) -> AppState {
    // ── Step 1: Auth components ──────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let evaluator = Arc::new(AccessEvaluator::new());

    // ── Step 2: Repositories ─────────────────────────────────────
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.pool().clone()));
    let properties: Arc<dyn PropertyStore> = Arc::new(PropertyRepository::new(db.pool().clone()));
    let deals: Arc<dyn DealStore> = Arc::new(DealRepository::new(db.pool().clone()));
    let investments: Arc<dyn InvestmentStore> =
        Arc::new(InvestmentRepository::new(db.pool().clone()));
    let notifications: Arc<dyn NotificationStore> =
        Arc::new(NotificationRepository::new(db.pool().clone()));

    // ── Step 3: Services ─────────────────────────────────────────
    let emitter: Arc<dyn NotificationEmitter> = Arc::new(StoreEmitter::new(notifications.clone()));

    let user_service = Arc::new(UserService::new(
        users.clone(),
        password_hasher.clone(),
        jwt_encoder.clone(),
        &config.auth,
    ));
    let admin_user_service = Arc::new(AdminUserService::new(users.clone(), evaluator.clone()));
    let property_service = Arc::new(PropertyService::new(
        properties.clone(),
        evaluator.clone(),
        emitter.clone(),
    ));
    let deal_service = Arc::new(DealService::new(
        deals.clone(),
        properties.clone(),
        evaluator.clone(),
        emitter.clone(),
    ));
    let investment_service = Arc::new(InvestmentService::new(
        investments.clone(),
        properties.clone(),
        evaluator.clone(),
    ));
    let notification_service = Arc::new(NotificationService::new(notifications.clone()));
    let stats_service = Arc::new(AdminStatsService::new(
        users.clone(),
        properties.clone(),
        evaluator.clone(),
    ));

    AppState {
        config: Arc::new(config.clone()),
        db,
        jwt_decoder,
        user_service,
        admin_user_service,
        property_service,
        deal_service,
        investment_service,
        notification_service,
        stats_service,
    }
}

/// Runs the Haven server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting Haven server...");

    if config.database.auto_migrate {
        haven_database::migration::run_migrations(db.pool()).await?;
    }

    let state = build_state(&config, db.clone());
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Haven server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, draining connections...");
}
