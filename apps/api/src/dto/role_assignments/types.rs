use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::RoleResponse;

/// Transport form of one role assignment.
///
/// Display names are filled in on reads and ignored on writes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-dto.ts"
)]
pub struct RoleAssignmentDto {
    pub role_id: String,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub supervisory_node_id: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub program_name: Option<String>,
    #[serde(default)]
    pub supervisory_node_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
}

/// Form values of the add-role row.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-draft-dto.ts"
)]
pub struct RoleAssignmentDraftDto {
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub supervisory_node_id: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
}

/// Query string of the tab view.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-page-query.ts"
)]
pub struct RoleAssignmentPageQuery {
    #[serde(rename = "type")]
    pub right_type: String,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// One page of a user's assignments on a tab.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-page-response.ts"
)]
pub struct RoleAssignmentPageResponse {
    pub available_roles: Vec<RoleResponse>,
    pub rows: Vec<RoleAssignmentDto>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Incoming payload for adding a draft to a working list.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/add-role-assignment-request.ts"
)]
pub struct AddRoleAssignmentRequest {
    #[serde(rename = "type")]
    pub right_type: String,
    #[serde(default)]
    pub current: Vec<RoleAssignmentDto>,
    pub draft: RoleAssignmentDraftDto,
}

/// Incoming payload for removing an entry from a working list.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/remove-role-assignment-request.ts"
)]
pub struct RemoveRoleAssignmentRequest {
    #[serde(rename = "type")]
    pub right_type: String,
    #[serde(default)]
    pub current: Vec<RoleAssignmentDto>,
    pub target: RoleAssignmentDto,
}

/// User-facing message attached to an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/notification-response.ts"
)]
pub struct NotificationResponse {
    pub level: &'static str,
    pub message_key: &'static str,
}

/// Next working list after an add or remove.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-edit-response.ts"
)]
pub struct RoleAssignmentEditResponse {
    pub assignments: Vec<RoleAssignmentDto>,
    pub notification: NotificationResponse,
}

/// Incoming payload for saving a working list.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-role-assignments-request.ts"
)]
pub struct SaveRoleAssignmentsRequest {
    pub assignments: Vec<RoleAssignmentDto>,
}

/// Incoming payload for copying another user's assignments.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/import-role-assignments-request.ts"
)]
pub struct ImportRoleAssignmentsRequest {
    pub source_user_id: String,
}

/// Result of an import.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/import-summary-response.ts"
)]
pub struct ImportSummaryResponse {
    pub assignments: Vec<RoleAssignmentDto>,
    pub imported: usize,
    pub skipped: usize,
}
