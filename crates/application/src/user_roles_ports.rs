use async_trait::async_trait;

use lmis_core::AppResult;
use lmis_domain::{Facility, Program, Role, RoleAssignment, SupervisoryNode, User, UserId};

/// Repository port for users and their role assignments.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Finds one user with its current assignments.
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Replaces the full assignment list of a user.
    async fn replace_role_assignments(
        &self,
        user_id: UserId,
        assignments: Vec<RoleAssignment>,
    ) -> AppResult<()>;
}

/// Repository port for the read-only catalogs shown beside assignments.
#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    /// Lists the role catalog.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Lists programs.
    async fn list_programs(&self) -> AppResult<Vec<Program>>;

    /// Lists supervisory nodes.
    async fn list_supervisory_nodes(&self) -> AppResult<Vec<SupervisoryNode>>;

    /// Lists supplying facilities.
    async fn list_supplying_facilities(&self) -> AppResult<Vec<Facility>>;
}

/// Default number of rows per assignment page.
pub const DEFAULT_ASSIGNMENT_PAGE_SIZE: usize = 5;

/// Largest accepted assignment page size.
pub const MAX_ASSIGNMENT_PAGE_SIZE: usize = 100;

/// Query parameters for one right type tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentQuery {
    /// Case-insensitive role name filter.
    pub search: Option<String>,
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for RoleAssignmentQuery {
    fn default() -> Self {
        Self {
            search: None,
            page_index: 0,
            page_size: DEFAULT_ASSIGNMENT_PAGE_SIZE,
        }
    }
}

/// One page of a user's assignments on a right type tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentPage {
    /// Roles that can be added on the tab.
    pub available_roles: Vec<Role>,
    /// Assignments on the page with display names resolved.
    pub rows: Vec<RoleAssignment>,
    /// Matching assignments across all pages.
    pub total: usize,
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

/// Result of copying another user's assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Merged list that was persisted.
    pub assignments: Vec<RoleAssignment>,
    /// Incoming assignments that were appended.
    pub imported: usize,
    /// Incoming assignments skipped as duplicates.
    pub skipped: usize,
}

/// Choices offered by the add-role form of one right type tab.
///
/// Scope lists the tab does not use stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFormOptions {
    /// Roles that can be added on the tab.
    pub roles: Vec<Role>,
    /// Program picker entries.
    pub programs: Vec<Program>,
    /// Supervisory node picker entries.
    pub supervisory_nodes: Vec<SupervisoryNode>,
    /// Supplying facility picker entries.
    pub warehouses: Vec<Facility>,
}
