//! Investment ledger endpoints.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use haven_entity::investment::Investment;
use haven_service::investment::{OpenInvestment, Portfolio};

use crate::dto::request::{
    CloseInvestmentRequest, OpenInvestmentRequest, RecordReturnRequest, RevalueRequest,
};
use crate::dto::response::{ApiResponse, InvestmentListResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/investor/investments
pub async fn open(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OpenInvestmentRequest>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    req.validate()?;

    let investment = state
        .investment_service
        .open(
            &auth,
            OpenInvestment {
                property_id: req.property_id,
                title: req.title,
                kind: req.kind,
                initial_amount: req.initial_amount,
                expected_annual_return: req.expected_annual_return,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(investment)))
}

/// GET /api/investor/investments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<InvestmentListResponse>>, ApiError> {
    let (investments, metrics) = state.investment_service.list(&auth).await?;

    Ok(Json(ApiResponse::ok(InvestmentListResponse {
        investments,
        metrics,
    })))
}

/// GET /api/investor/investments/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    let investment = state.investment_service.get(&auth, id).await?;

    Ok(Json(ApiResponse::ok(investment)))
}

/// POST /api/investor/investments/{id}/returns
pub async fn record_return(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordReturnRequest>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    let investment = state
        .investment_service
        .record_return(&auth, id, req.amount, req.note)
        .await?;

    Ok(Json(ApiResponse::ok(investment)))
}

/// PUT /api/investor/investments/{id}/value
pub async fn revalue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RevalueRequest>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    let investment = state
        .investment_service
        .revalue(&auth, id, req.current_value)
        .await?;

    Ok(Json(ApiResponse::ok(investment)))
}

/// PUT /api/investor/investments/{id}/close
pub async fn close(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CloseInvestmentRequest>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    let investment = state
        .investment_service
        .close(&auth, id, req.status, req.reason.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(investment)))
}

/// GET /api/investor/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Portfolio>>, ApiError> {
    let portfolio = state.investment_service.portfolio(&auth).await?;

    Ok(Json(ApiResponse::ok(portfolio)))
}
