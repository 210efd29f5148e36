//! Listing moderation.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use haven_core::types::pagination::PageResponse;
use haven_entity::property::Property;

use crate::dto::request::RejectPropertyRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/properties/pending
pub async fn pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Property>>>, ApiError> {
    let page = state
        .property_service
        .pending(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/properties/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state.property_service.approve(&auth, id).await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// PUT /api/admin/properties/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<RejectPropertyRequest>>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let property = state.property_service.reject(&auth, id, req.reason).await?;

    Ok(Json(ApiResponse::ok(property)))
}
