use std::collections::HashMap;

use async_trait::async_trait;
use lmis_application::UserRepository;
use lmis_core::{AppError, AppResult};
use lmis_domain::{RoleAssignment, User, UserId};
use tokio::sync::RwLock;

/// In-memory user repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;

        let mut values: Vec<User> = users.values().cloned().collect();
        values.sort_by(|left, right| left.username.cmp(&right.username));

        Ok(values)
    }

    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn replace_role_assignments(
        &self,
        user_id: UserId,
        assignments: Vec<RoleAssignment>,
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        user.role_assignments = assignments;
        Ok(())
    }
}
