//! Best-effort notification emission.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use haven_database::store::NotificationStore;
use haven_entity::notification::NewNotification;

/// Sink for notification drafts produced by workflow transitions.
///
/// Emission runs after the state change has committed and must never
/// fail the surrounding operation.
#[async_trait]
pub trait NotificationEmitter: Send + Sync {
    /// Write the drafts. Failures are logged at `warn` and swallowed.
    async fn emit(&self, drafts: Vec<NewNotification>);
}

/// Emitter backed by the notification store.
#[derive(Clone)]
pub struct StoreEmitter {
    notifications: Arc<dyn NotificationStore>,
}

impl StoreEmitter {
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl NotificationEmitter for StoreEmitter {
    async fn emit(&self, drafts: Vec<NewNotification>) {
        for draft in drafts {
            if let Err(e) = self.notifications.create(&draft).await {
                warn!(
                    user_id = %draft.user_id,
                    kind = %draft.kind,
                    error = %e,
                    "Failed to write notification"
                );
            }
        }
    }
}
