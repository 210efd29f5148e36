//! Request DTOs with validation.
//!
//! Structural checks (presence, length, format) live here; business
//! rules such as price positivity or role policy belong to the services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use haven_entity::deal::DealKind;
use haven_entity::investment::{InvestmentKind, InvestmentStatus};
use haven_entity::property::PropertyKind;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Plain-text password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role name.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// New listing request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    /// Listing title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Property category.
    pub kind: PropertyKind,
    /// Asking price in minor units.
    pub price: i64,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// State or region.
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    /// Number of bedrooms.
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    pub bathrooms: Option<i32>,
    /// Area in square metres.
    pub area_sqm: Option<i32>,
    /// Premium investment flag.
    #[serde(default)]
    pub is_premium: bool,
}

/// Listing update request. All fields optional; omitted fields keep
/// their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePropertyRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New asking price in minor units.
    pub price: Option<i64>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state or region.
    pub state: Option<String>,
    /// New bedroom count.
    pub bedrooms: Option<i32>,
    /// New bathroom count.
    pub bathrooms: Option<i32>,
    /// New area in square metres.
    pub area_sqm: Option<i32>,
    /// New premium flag.
    pub is_premium: Option<bool>,
}

/// Listing rejection request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectPropertyRequest {
    /// Reason shown to the owner.
    pub reason: Option<String>,
}

/// New deal request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenDealRequest {
    /// The listing to negotiate on.
    pub property_id: Uuid,
    /// Transaction kind.
    pub kind: DealKind,
    /// Offered amount in minor units.
    pub amount: i64,
    /// Free-form notes to the landlord.
    pub notes: Option<String>,
}

/// Deal completion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteDealRequest {
    /// External payment reference.
    pub payment_reference: Option<String>,
    /// External transaction identifier.
    pub transaction_id: Option<String>,
}

/// Deal cancellation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelDealRequest {
    /// Reason recorded on the deal.
    pub reason: Option<String>,
}

/// New investment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OpenInvestmentRequest {
    /// The underlying property, if the position targets one.
    pub property_id: Option<Uuid>,
    /// Position title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Investment vehicle.
    pub kind: InvestmentKind,
    /// Amount paid in, in minor units.
    pub initial_amount: i64,
    /// Expected annual return, percent.
    pub expected_annual_return: f64,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Recorded-return request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReturnRequest {
    /// Return amount in minor units.
    pub amount: i64,
    /// Optional note on the return.
    pub note: Option<String>,
}

/// Revaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevalueRequest {
    /// New current value in minor units.
    pub current_value: i64,
}

/// Investment close request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseInvestmentRequest {
    /// Terminal status to record.
    pub status: InvestmentStatus,
    /// Reason for closing.
    pub reason: Option<String>,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    /// New role name.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}
