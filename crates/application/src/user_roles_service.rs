use std::sync::Arc;

use lmis_core::{AppError, AppResult};
use lmis_domain::{ReferenceData, RoleAssignment, User, UserId};
use tracing::info;

use crate::user_roles_ports::{ReferenceDataRepository, UserRepository};

mod import;
mod options;
mod page;

/// Application service behind the user roles pages.
#[derive(Clone)]
pub struct UserRolesService {
    user_repository: Arc<dyn UserRepository>,
    reference_data_repository: Arc<dyn ReferenceDataRepository>,
}

impl UserRolesService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        reference_data_repository: Arc<dyn ReferenceDataRepository>,
    ) -> Self {
        Self {
            user_repository,
            reference_data_repository,
        }
    }

    /// Lists users that can act as an import source.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut users = self.user_repository.list_users().await?;
        users.sort_by(|left, right| left.username.cmp(&right.username));
        Ok(users)
    }

    /// Returns one user or a not-found error.
    pub async fn user(&self, user_id: UserId) -> AppResult<User> {
        self.user_repository
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))
    }

    /// Replaces the stored assignment list of a user.
    ///
    /// Display names are stripped before persisting.
    pub async fn save_role_assignments(
        &self,
        user_id: UserId,
        assignments: Vec<RoleAssignment>,
    ) -> AppResult<()> {
        self.user(user_id).await?;

        let assignments: Vec<RoleAssignment> = assignments
            .iter()
            .map(RoleAssignment::without_display_fields)
            .collect();
        let count = assignments.len();

        self.user_repository
            .replace_role_assignments(user_id, assignments)
            .await?;

        info!(user_id = %user_id, count, "saved role assignments");
        Ok(())
    }

    async fn reference_data(&self) -> AppResult<ReferenceData> {
        let roles = self.reference_data_repository.list_roles().await?;
        let programs = self.reference_data_repository.list_programs().await?;
        let supervisory_nodes = self
            .reference_data_repository
            .list_supervisory_nodes()
            .await?;
        let facilities = self
            .reference_data_repository
            .list_supplying_facilities()
            .await?;

        Ok(ReferenceData::new(
            roles,
            programs,
            supervisory_nodes,
            facilities,
        ))
    }
}
