//! Store traits for all Haven aggregates.
//!
//! Services hold `Arc<dyn XxxStore>` rather than concrete repositories,
//! so the workflow layer can be exercised against in-memory fakes. The
//! implementations in [`crate::repositories`] back these with Postgres.

use async_trait::async_trait;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_entity::deal::{CreateDeal, Deal};
use haven_entity::investment::{CreateInvestment, Investment, InvestmentReturn, InvestmentStatus};
use haven_entity::notification::{NewNotification, Notification};
use haven_entity::property::{CreateProperty, Property, PropertyStatus, UpdateProperty};
use haven_entity::user::{CreateUser, UpdateProfile, User, UserRole};

/// Visibility filter for property listings, produced by the access
/// evaluator and executed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyScope {
    /// Every listing regardless of status.
    All,
    /// Listings owned by the given user, any status.
    OwnedBy(Uuid),
    /// Publicly visible listings only.
    ApprovedOnly,
}

/// Visibility filter for deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealScope {
    /// Every deal.
    All,
    /// Deals where the given user is the landlord.
    Landlord(Uuid),
    /// Deals where the given user is the buyer.
    Buyer(Uuid),
}

/// Visibility filter for investments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentScope {
    /// Every position.
    All,
    /// Positions held by the given investor.
    Investor(Uuid),
}

/// Persistence operations for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users with pagination, newest first.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;

    /// Create a new user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Update a user's own profile fields.
    async fn update_profile(&self, data: &UpdateProfile) -> AppResult<User>;

    /// Set a user's role.
    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User>;

    /// Delete a user. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Count all users.
    async fn count(&self) -> AppResult<u64>;

    /// Count users grouped by role.
    async fn count_by_role(&self) -> AppResult<Vec<(UserRole, i64)>>;

    /// The most recently registered users.
    async fn recent(&self, limit: i64) -> AppResult<Vec<User>>;
}

/// Persistence operations for property listings.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Find a listing by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>>;

    /// Create a new listing in `pending` status.
    async fn create(&self, data: &CreateProperty) -> AppResult<Property>;

    /// Update a listing's core fields.
    ///
    /// Guarded in SQL against `sold`/`rented` rows; returns `None` when
    /// the listing is missing or off the market.
    async fn update(&self, data: &UpdateProperty) -> AppResult<Option<Property>>;

    /// Delete a listing. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List listings visible under the given scope, newest first.
    async fn list(&self, scope: &PropertyScope, page: &PageRequest)
    -> AppResult<PageResponse<Property>>;

    /// The approval queue: pending listings, oldest first.
    async fn pending(&self, page: &PageRequest) -> AppResult<PageResponse<Property>>;

    /// Approve a pending listing. Returns `None` unless the row was
    /// still `pending`.
    async fn approve(&self, id: Uuid, admin_id: Uuid) -> AppResult<Option<Property>>;

    /// Reject a pending listing. Returns `None` unless the row was
    /// still `pending`.
    async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Option<Property>>;

    /// Approved listings that qualify as investment opportunities:
    /// premium, or priced at or above `min_price`.
    async fn opportunities(&self, min_price: i64, limit: i64) -> AppResult<Vec<Property>>;

    /// Count all listings.
    async fn count(&self) -> AppResult<u64>;

    /// Count listings grouped by status.
    async fn count_by_status(&self) -> AppResult<Vec<(PropertyStatus, i64)>>;

    /// The most recently created listings.
    async fn recent(&self, limit: i64) -> AppResult<Vec<Property>>;
}

/// Persistence operations for deals.
///
/// The transition methods are compare-and-set on the current status and
/// return `None` when the row has concurrently moved on; callers map
/// that to a failed precondition.
#[async_trait]
pub trait DealStore: Send + Sync {
    /// Find a deal by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Deal>>;

    /// Find the live (pending or confirmed) deal a buyer holds on a
    /// property, if any.
    async fn find_live_for_buyer(
        &self,
        property_id: Uuid,
        buyer_id: Uuid,
    ) -> AppResult<Option<Deal>>;

    /// Insert a new pending deal.
    ///
    /// The live-deal uniqueness invariant is enforced by a partial
    /// unique index; a violation surfaces as a conflict error.
    async fn create(&self, data: &CreateDeal) -> AppResult<Deal>;

    /// List deals visible under the given scope, newest first.
    async fn list(&self, scope: &DealScope) -> AppResult<Vec<Deal>>;

    /// `pending -> confirmed`.
    async fn confirm(&self, id: Uuid) -> AppResult<Option<Deal>>;

    /// `confirmed -> completed`, settling payment and, in the same
    /// transaction, moving the property to `property_status` when given.
    async fn complete(
        &self,
        id: Uuid,
        payment_reference: Option<&str>,
        transaction_id: Option<&str>,
        property_status: Option<PropertyStatus>,
    ) -> AppResult<Option<Deal>>;

    /// `pending|confirmed -> cancelled`.
    async fn cancel(&self, id: Uuid, reason: Option<&str>) -> AppResult<Option<Deal>>;
}

/// Persistence operations for investments.
#[async_trait]
pub trait InvestmentStore: Send + Sync {
    /// Find a position by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Investment>>;

    /// Open a new active position valued at its initial amount.
    async fn create(&self, data: &CreateInvestment) -> AppResult<Investment>;

    /// List positions visible under the given scope, newest first.
    async fn list(&self, scope: &InvestmentScope) -> AppResult<Vec<Investment>>;

    /// Append a payout to the returns ledger. Valuation is untouched.
    async fn record_return(
        &self,
        id: Uuid,
        ret: &InvestmentReturn,
    ) -> AppResult<Option<Investment>>;

    /// Set the current valuation and derived ROI. Compare-and-set on
    /// `active`; returns `None` when the position is closed or missing.
    async fn revalue(&self, id: Uuid, current_value: i64, roi: f64)
    -> AppResult<Option<Investment>>;

    /// Close an active position. Compare-and-set on `active`.
    async fn close(
        &self,
        id: Uuid,
        status: InvestmentStatus,
        reason: Option<&str>,
    ) -> AppResult<Option<Investment>>;
}

/// Persistence operations for notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Write a notification.
    async fn create(&self, data: &NewNotification) -> AppResult<Notification>;

    /// List a user's notifications, newest first.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Count a user's unread notifications.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Mark one of the user's notifications read. Returns whether a row
    /// matched.
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;

    /// Mark all of the user's notifications read. Returns how many rows
    /// changed.
    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<i64>;
}
