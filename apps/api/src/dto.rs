mod common;
mod reference_data;
mod role_assignments;
mod users;

pub use common::{HealthResponse, RightTypeResponse};
pub use reference_data::{AddFormOptionsQuery, AddFormOptionsResponse, ReferenceOptionResponse};
pub use role_assignments::{
    AddRoleAssignmentRequest, ImportRoleAssignmentsRequest, ImportSummaryResponse,
    NotificationResponse, RemoveRoleAssignmentRequest, RoleAssignmentDraftDto, RoleAssignmentDto,
    RoleAssignmentEditResponse, RoleAssignmentPageQuery, RoleAssignmentPageResponse,
    SaveRoleAssignmentsRequest,
};
pub use users::{RoleResponse, UserSummaryResponse};

#[cfg(test)]
mod tests {
    use super::{
        AddFormOptionsQuery, AddFormOptionsResponse, AddRoleAssignmentRequest, HealthResponse,
        ImportRoleAssignmentsRequest, ImportSummaryResponse, NotificationResponse,
        ReferenceOptionResponse, RemoveRoleAssignmentRequest, RightTypeResponse,
        RoleAssignmentDraftDto, RoleAssignmentDto, RoleAssignmentEditResponse,
        RoleAssignmentPageQuery, RoleAssignmentPageResponse, RoleResponse,
        SaveRoleAssignmentsRequest, UserSummaryResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        HealthResponse::export(&config)?;
        RightTypeResponse::export(&config)?;
        UserSummaryResponse::export(&config)?;
        RoleResponse::export(&config)?;
        RoleAssignmentDto::export(&config)?;
        RoleAssignmentDraftDto::export(&config)?;
        RoleAssignmentPageQuery::export(&config)?;
        RoleAssignmentPageResponse::export(&config)?;
        AddRoleAssignmentRequest::export(&config)?;
        RemoveRoleAssignmentRequest::export(&config)?;
        NotificationResponse::export(&config)?;
        RoleAssignmentEditResponse::export(&config)?;
        SaveRoleAssignmentsRequest::export(&config)?;
        ImportRoleAssignmentsRequest::export(&config)?;
        ImportSummaryResponse::export(&config)?;
        AddFormOptionsQuery::export(&config)?;
        AddFormOptionsResponse::export(&config)?;
        ReferenceOptionResponse::export(&config)?;
        ErrorResponse::export(&config)?;

        Ok(())
    }
}
