//! Deal workflow endpoints.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use haven_entity::deal::Deal;
use haven_service::deal::OpenDeal;

use crate::dto::request::{CancelDealRequest, CompleteDealRequest, OpenDealRequest};
use crate::dto::response::{ApiResponse, DealListResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/deals
pub async fn open(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OpenDealRequest>,
) -> Result<Json<ApiResponse<Deal>>, ApiError> {
    let deal = state
        .deal_service
        .open(
            &auth,
            OpenDeal {
                property_id: req.property_id,
                kind: req.kind,
                amount: req.amount,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(deal)))
}

/// GET /api/deals
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DealListResponse>>, ApiError> {
    let (deals, summary) = state.deal_service.list(&auth).await?;

    Ok(Json(ApiResponse::ok(DealListResponse { deals, summary })))
}

/// GET /api/deals/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Deal>>, ApiError> {
    let deal = state.deal_service.get(&auth, id).await?;

    Ok(Json(ApiResponse::ok(deal)))
}

/// PUT /api/deals/{id}/confirm
pub async fn confirm(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Deal>>, ApiError> {
    let deal = state.deal_service.confirm(&auth, id).await?;

    Ok(Json(ApiResponse::ok(deal)))
}

/// PUT /api/deals/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<CompleteDealRequest>>,
) -> Result<Json<ApiResponse<Deal>>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let deal = state
        .deal_service
        .complete(
            &auth,
            id,
            req.payment_reference.as_deref(),
            req.transaction_id.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::ok(deal)))
}

/// PUT /api/deals/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<CancelDealRequest>>,
) -> Result<Json<ApiResponse<Deal>>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let deal = state
        .deal_service
        .cancel(&auth, id, req.reason.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(deal)))
}
