//! Notification inbox operations.

use std::sync::Arc;

use uuid::Uuid;

use haven_auth::access::Actor;
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_database::store::NotificationStore;
use haven_entity::notification::Notification;

/// Manages a user's notification inbox.
#[derive(Clone)]
pub struct NotificationService {
    /// Notification store.
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    /// Lists the actor's notifications, newest first.
    pub async fn list(
        &self,
        actor: &Actor,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notifications.find_by_user(actor.id, &page).await
    }

    /// Counts the actor's unread notifications.
    pub async fn unread_count(&self, actor: &Actor) -> AppResult<i64> {
        self.notifications.count_unread(actor.id).await
    }

    /// Marks one of the actor's notifications as read.
    ///
    /// Another user's notification is indistinguishable from a missing
    /// one.
    pub async fn mark_read(&self, actor: &Actor, notification_id: Uuid) -> AppResult<()> {
        let matched = self.notifications.mark_read(notification_id, actor.id).await?;
        if !matched {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks all of the actor's notifications as read. Returns how many
    /// changed.
    pub async fn mark_all_read(&self, actor: &Actor) -> AppResult<i64> {
        self.notifications.mark_all_read(actor.id).await
    }
}
