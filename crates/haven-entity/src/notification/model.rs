//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// An in-app notification delivered to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Event kind.
    pub kind: NotificationKind,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// In-app navigation target.
    pub link: Option<String>,
    /// Property involved, if applicable.
    pub property_id: Option<Uuid>,
    /// Deal involved, if applicable.
    pub deal_id: Option<Uuid>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// A notification waiting to be written.
///
/// Transition functions produce these; the emitter persists them after
/// the state change commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Event kind.
    pub kind: NotificationKind,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// In-app navigation target.
    pub link: Option<String>,
    /// Property involved, if applicable.
    pub property_id: Option<Uuid>,
    /// Deal involved, if applicable.
    pub deal_id: Option<Uuid>,
}
