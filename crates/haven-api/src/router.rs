//! Route definitions for the Haven HTTP API.
//!
//! Routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and threads it through every handler via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Builds the complete route tree.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(property_routes())
        .merge(deal_routes())
        .merge(investor_routes())
        .merge(notification_routes())
        .merge(admin_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Health probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Auth endpoints: register, login, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// User self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/me", put(handlers::user::update_profile))
}

/// Listing CRUD. Reads admit anonymous callers.
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list))
        .route("/properties", post(handlers::property::create))
        .route("/properties/{id}", get(handlers::property::get))
        .route("/properties/{id}", put(handlers::property::update))
        .route("/properties/{id}", delete(handlers::property::delete))
}

/// Deal workflow: open, list, inspect, and the three transitions.
fn deal_routes() -> Router<AppState> {
    Router::new()
        .route("/deals", post(handlers::deal::open))
        .route("/deals", get(handlers::deal::list))
        .route("/deals/{id}", get(handlers::deal::get))
        .route("/deals/{id}/confirm", put(handlers::deal::confirm))
        .route("/deals/{id}/complete", put(handlers::deal::complete))
        .route("/deals/{id}/cancel", put(handlers::deal::cancel))
}

/// Investment ledger and dashboard.
fn investor_routes() -> Router<AppState> {
    Router::new()
        .route("/investor/investments", post(handlers::investment::open))
        .route("/investor/investments", get(handlers::investment::list))
        .route("/investor/investments/{id}", get(handlers::investment::get))
        .route(
            "/investor/investments/{id}/returns",
            post(handlers::investment::record_return),
        )
        .route(
            "/investor/investments/{id}/value",
            put(handlers::investment::revalue),
        )
        .route(
            "/investor/investments/{id}/close",
            put(handlers::investment::close),
        )
        .route("/investor/dashboard", get(handlers::investment::dashboard))
}

/// Notification inbox.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Admin endpoints: stats, user administration, moderation queue.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(handlers::admin::stats::stats))
        .route("/admin/users", get(handlers::admin::users::list))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        .route("/admin/users/{id}", delete(handlers::admin::users::delete))
        .route(
            "/admin/properties/pending",
            get(handlers::admin::properties::pending),
        )
        .route(
            "/admin/properties/{id}/approve",
            put(handlers::admin::properties::approve),
        )
        .route(
            "/admin/properties/{id}/reject",
            put(handlers::admin::properties::reject),
        )
}
