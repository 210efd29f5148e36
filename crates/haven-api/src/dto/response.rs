//! Response DTOs.
//!
//! Domain entities that are safe to expose (`Property`, `Deal`,
//! `Investment`, `Notification`) are serialized directly; users go
//! through [`UserResponse`] so credential fields never leave the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use haven_entity::deal::Deal;
use haven_entity::investment::Investment;
use haven_entity::user::{User, UserRole};
use haven_service::deal::DealSummary;
use haven_service::investment::PortfolioMetrics;
use haven_service::user::AuthSession;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates an acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Counter body, used by the notification endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// The count in question.
    pub count: i64,
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when all checks pass, `"degraded"` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the database answered the ping.
    pub database: bool,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Platform role.
    pub role: UserRole,
    /// Investor reference, for investor accounts.
    pub investor_token: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            investor_token: user.investor_token,
            created_at: user.created_at,
        }
    }
}

/// Successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
            user: session.user.into(),
        }
    }
}

/// Deal listing with aggregate figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealListResponse {
    /// Deals visible to the caller.
    pub deals: Vec<Deal>,
    /// Aggregates over those deals.
    pub summary: DealSummary,
}

/// Investment listing with portfolio aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentListResponse {
    /// Positions visible to the caller.
    pub investments: Vec<Investment>,
    /// Aggregates over those positions.
    pub metrics: PortfolioMetrics,
}
