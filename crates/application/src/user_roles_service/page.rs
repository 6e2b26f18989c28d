use std::cmp::Ordering;

use lmis_domain::{RightTypeSelector, roles_for_right_type};

use super::*;
use crate::user_roles_ports::{MAX_ASSIGNMENT_PAGE_SIZE, RoleAssignmentPage, RoleAssignmentQuery};

impl UserRolesService {
    /// Builds the view of one right type tab for a user.
    ///
    /// Only assignments whose role is available on the tab are listed.
    /// Rows are sorted by role name, then by scope names.
    pub async fn role_assignment_page(
        &self,
        user_id: UserId,
        selector: &RightTypeSelector,
        query: RoleAssignmentQuery,
    ) -> AppResult<RoleAssignmentPage> {
        if query.page_size == 0 || query.page_size > MAX_ASSIGNMENT_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "page size must be between 1 and {MAX_ASSIGNMENT_PAGE_SIZE}"
            )));
        }

        let user = self.user(user_id).await?;
        let reference_data = self.reference_data().await?;

        let available_roles = match selector.right_type() {
            Some(right_type) => roles_for_right_type(reference_data.roles(), right_type),
            None => Vec::new(),
        };

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);

        let mut rows: Vec<RoleAssignment> = user
            .role_assignments
            .iter()
            .filter(|assignment| {
                available_roles
                    .iter()
                    .any(|role| role.id == assignment.role_id)
            })
            .map(|assignment| reference_data.describe_assignment(assignment))
            .filter(|row| match &search {
                Some(search) => row
                    .role_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(search.as_str())),
                None => true,
            })
            .collect();
        rows.sort_by(compare_rows);

        let total = rows.len();
        let rows = rows
            .into_iter()
            .skip(query.page_index.saturating_mul(query.page_size))
            .take(query.page_size)
            .collect();

        Ok(RoleAssignmentPage {
            available_roles,
            rows,
            total,
            page_index: query.page_index,
            page_size: query.page_size,
        })
    }
}

fn sort_key(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_lowercase()
}

fn compare_rows(left: &RoleAssignment, right: &RoleAssignment) -> Ordering {
    sort_key(&left.role_name)
        .cmp(&sort_key(&right.role_name))
        .then_with(|| sort_key(&left.program_name).cmp(&sort_key(&right.program_name)))
        .then_with(|| {
            sort_key(&left.supervisory_node_name).cmp(&sort_key(&right.supervisory_node_name))
        })
        .then_with(|| sort_key(&left.warehouse_name).cmp(&sort_key(&right.warehouse_name)))
}
