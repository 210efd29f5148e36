//! User administration.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use haven_core::types::pagination::PageResponse;
use haven_entity::user::UserRole;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let page = state
        .admin_user_service
        .list_users(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.map(UserResponse::from))))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()?;
    let role: UserRole = req.role.parse()?;

    let user = state
        .admin_user_service
        .change_role(&auth, id, role)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete_user(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new("User deleted"))))
}
