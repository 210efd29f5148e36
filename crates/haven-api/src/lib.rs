//! # haven-api
//!
//! HTTP API layer for Haven built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, tracing),
//! extractors, DTOs, and the mapping from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
