//! Platform statistics.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let stats = state.stats_service.generate(&auth).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": stats,
    })))
}
