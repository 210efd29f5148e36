//! Registration, login, and session introspection.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use haven_entity::user::UserRole;
use haven_service::user::RegisterUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()?;
    let role: UserRole = req.role.parse()?;

    let session = state
        .user_service
        .register(RegisterUser {
            name: req.name,
            email: req.email,
            phone: req.phone,
            password: req.password,
            role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(session.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()?;

    let session = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(session.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.me(&auth).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
