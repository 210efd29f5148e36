//! Admin user management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use haven_auth::access::{AccessEvaluator, Actor};
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_database::store::UserStore;
use haven_entity::user::{User, UserRole};

/// Administrative operations over user accounts.
#[derive(Clone)]
pub struct AdminUserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Access evaluator.
    evaluator: Arc<AccessEvaluator>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(users: Arc<dyn UserStore>, evaluator: Arc<AccessEvaluator>) -> Self {
        Self { users, evaluator }
    }

    /// Lists all users, newest first.
    pub async fn list_users(
        &self,
        actor: &Actor,
        page: PageRequest,
    ) -> AppResult<PageResponse<User>> {
        self.evaluator.require_admin(actor)?;
        self.users.find_all(&page).await
    }

    /// Assigns a user a new role.
    pub async fn change_role(
        &self,
        actor: &Actor,
        user_id: Uuid,
        role: UserRole,
    ) -> AppResult<User> {
        self.evaluator.require_admin(actor)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let user = self.users.update_role(user_id, role).await?;

        info!(
            admin_id = %actor.id,
            target_id = %user_id,
            new_role = %role,
            "User role changed"
        );

        Ok(user)
    }

    /// Deletes a user account. Admins cannot delete themselves.
    pub async fn delete_user(&self, actor: &Actor, user_id: Uuid) -> AppResult<()> {
        self.evaluator.require_admin(actor)?;

        if user_id == actor.id {
            return Err(AppError::precondition("You cannot delete your own account"));
        }

        let removed = self.users.delete(user_id).await?;
        if !removed {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %actor.id, target_id = %user_id, "User deleted");

        Ok(())
    }
}
