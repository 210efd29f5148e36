//! Bearer-token extractors.
//!
//! [`AuthUser`] rejects requests without a valid token; [`OptionalAuthUser`]
//! admits anonymous requests but still rejects malformed tokens.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use haven_auth::Actor;
use haven_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, decoded from the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Actor);

impl std::ops::Deref for AuthUser {
    type Target = Actor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The caller if a token was presented, or `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<Actor>);

/// Pulls the bearer token out of the Authorization header, if present.
fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(header) = parts.headers.get("authorization") else {
        return Ok(None);
    };

    let value = header
        .to_str()
        .map_err(|_| AppError::authentication("Invalid Authorization header"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    Ok(Some(token))
}

fn decode(state: &AppState, token: &str) -> Result<Actor, AppError> {
    let claims = state.jwt_decoder.decode_token(token)?;
    Ok(Actor::from_claims(&claims))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        Ok(AuthUser(decode(state, token)?))
    }
}

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A malformed or expired token is rejected rather than treated
        // as anonymous.
        match bearer_token(parts)? {
            Some(token) => Ok(OptionalAuthUser(Some(decode(state, token)?))),
            None => Ok(OptionalAuthUser(None)),
        }
    }
}
