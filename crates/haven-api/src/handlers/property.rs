//! Property listing endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use haven_core::types::pagination::PageResponse;
use haven_entity::property::{Property, UpdateProperty};
use haven_service::property::ListingDraft;

use crate::dto::request::{CreatePropertyRequest, UpdatePropertyRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, OptionalAuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/properties
pub async fn list(
    State(state): State<AppState>,
    OptionalAuthUser(actor): OptionalAuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Property>>>, ApiError> {
    let page = state
        .property_service
        .list(actor.as_ref(), params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/properties/{id}
pub async fn get(
    State(state): State<AppState>,
    OptionalAuthUser(actor): OptionalAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state.property_service.get(actor.as_ref(), id).await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// POST /api/properties
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    req.validate()?;

    let property = state
        .property_service
        .create(
            &auth,
            ListingDraft {
                title: req.title,
                description: req.description,
                kind: req.kind,
                price: req.price,
                address: req.address,
                city: req.city,
                state: req.state,
                bedrooms: req.bedrooms,
                bathrooms: req.bathrooms,
                area_sqm: req.area_sqm,
                is_premium: req.is_premium,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// PUT /api/properties/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state
        .property_service
        .update(
            &auth,
            UpdateProperty {
                id,
                title: req.title,
                description: req.description,
                price: req.price,
                address: req.address,
                city: req.city,
                state: req.state,
                bedrooms: req.bedrooms,
                bathrooms: req.bathrooms,
                area_sqm: req.area_sqm,
                is_premium: req.is_premium,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// DELETE /api/properties/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.property_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Property deleted",
    ))))
}
