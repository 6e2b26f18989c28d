mod conversions;
mod types;

pub use types::{
    AddRoleAssignmentRequest, ImportRoleAssignmentsRequest, ImportSummaryResponse,
    NotificationResponse, RemoveRoleAssignmentRequest, RoleAssignmentDraftDto, RoleAssignmentDto,
    RoleAssignmentEditResponse, RoleAssignmentPageQuery, RoleAssignmentPageResponse,
    SaveRoleAssignmentsRequest,
};
