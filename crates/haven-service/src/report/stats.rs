//! Platform statistics for the admin dashboard.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use haven_auth::access::{AccessEvaluator, Actor};
use haven_core::result::AppResult;
use haven_database::store::{PropertyStore, UserStore};
use haven_entity::property::{Property, PropertyStatus};
use haven_entity::user::{User, UserRole};

/// How many recent rows the stats block carries.
const RECENT_LIMIT: i64 = 5;

/// Builds the admin statistics block.
#[derive(Clone)]
pub struct AdminStatsService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Property store.
    properties: Arc<dyn PropertyStore>,
    /// Access evaluator.
    evaluator: Arc<AccessEvaluator>,
}

/// Snapshot of platform activity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlatformStats {
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// Total registered users.
    pub total_users: u64,
    /// Total property listings.
    pub total_properties: u64,
    /// Listings awaiting moderation.
    pub pending_properties: i64,
    /// User counts per role.
    pub users_by_role: Vec<RoleCount>,
    /// Listing counts per status.
    pub properties_by_status: Vec<StatusCount>,
    /// Most recently registered users.
    pub recent_users: Vec<User>,
    /// Most recently created listings.
    pub recent_properties: Vec<Property>,
}

/// A user count for one role.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoleCount {
    /// The role.
    pub role: UserRole,
    /// How many users hold it.
    pub count: i64,
}

/// A listing count for one status.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatusCount {
    /// The status.
    pub status: PropertyStatus,
    /// How many listings are in it.
    pub count: i64,
}

impl AdminStatsService {
    /// Creates a new stats service.
    pub fn new(
        users: Arc<dyn UserStore>,
        properties: Arc<dyn PropertyStore>,
        evaluator: Arc<AccessEvaluator>,
    ) -> Self {
        Self {
            users,
            properties,
            evaluator,
        }
    }

    /// Generates the current platform snapshot. Admin only.
    pub async fn generate(&self, actor: &Actor) -> AppResult<PlatformStats> {
        self.evaluator.require_admin(actor)?;

        let total_users = self.users.count().await?;
        let total_properties = self.properties.count().await?;

        let users_by_role = self
            .users
            .count_by_role()
            .await?
            .into_iter()
            .map(|(role, count)| RoleCount { role, count })
            .collect();

        let properties_by_status: Vec<StatusCount> = self
            .properties
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();

        let pending_properties = properties_by_status
            .iter()
            .find(|entry| entry.status == PropertyStatus::Pending)
            .map(|entry| entry.count)
            .unwrap_or(0);

        let recent_users = self.users.recent(RECENT_LIMIT).await?;
        let recent_properties = self.properties.recent(RECENT_LIMIT).await?;

        Ok(PlatformStats {
            generated_at: Utc::now(),
            total_users,
            total_properties,
            pending_properties,
            users_by_role,
            properties_by_status,
            recent_users,
            recent_properties,
        })
    }
}
