//! Maps domain errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use haven_core::error::{AppError, ErrorKind};

/// Carries an [`AppError`] across the handler boundary.
///
/// Handlers return `Result<_, ApiError>` so that `?` converts any
/// domain error into the uniform error envelope.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Body shape for every error response:
/// `{ "success": false, "error": { "code", "message" } }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self(AppError::validation(errors.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation | ErrorKind::Precondition => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0, "request failed");
        } else {
            tracing::debug!(kind = %self.0.kind, error = %self.0, "request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: ErrorDetail {
                code: self.0.kind.to_string(),
                message: self.0.message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(kind: ErrorKind) -> StatusCode {
        let err = ApiError(AppError::new(kind, "boom"));
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Precondition), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::Authentication),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(ErrorKind::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::CONFLICT);
    }

    #[test]
    fn server_errors_map_to_5xx() {
        assert_eq!(
            status_for(ErrorKind::StoreUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(ErrorKind::Database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
