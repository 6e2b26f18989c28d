use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use lmis_application::{DEFAULT_ASSIGNMENT_PAGE_SIZE, RoleAssignmentEditor, RoleAssignmentQuery};
use lmis_domain::{RightTypeSelector, RoleAssignment, RoleAssignmentDraft, UserId};
use tracing::debug;

use crate::dto::{
    AddFormOptionsQuery, AddFormOptionsResponse, AddRoleAssignmentRequest, ImportRoleAssignmentsRequest, ImportSummaryResponse,
    RemoveRoleAssignmentRequest, RoleAssignmentDto, RoleAssignmentEditResponse,
    RoleAssignmentPageQuery, RoleAssignmentPageResponse, SaveRoleAssignmentsRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

mod edit;
mod options;
mod page;
mod persist;

pub use edit::{add_role_assignment_handler, remove_role_assignment_handler};
pub use options::add_form_options_handler;
pub use page::role_assignment_page_handler;
pub use persist::{import_role_assignments_handler, save_role_assignments_handler};

fn parse_user_id(value: &str) -> ApiResult<UserId> {
    UserId::from_str(value).map_err(ApiError::from)
}

fn into_assignments(values: Vec<RoleAssignmentDto>) -> Vec<RoleAssignment> {
    values.into_iter().map(RoleAssignment::from).collect()
}

fn into_dtos(values: Vec<RoleAssignment>) -> Vec<RoleAssignmentDto> {
    values.into_iter().map(RoleAssignmentDto::from).collect()
}

#[cfg(test)]
mod tests;
