use lmis_application::{ImportSummary, Notification, NotificationLevel, RoleAssignmentPage};
use lmis_domain::{RoleAssignment, RoleAssignmentDraft};

use crate::dto::{
    ImportSummaryResponse, NotificationResponse, RoleAssignmentDraftDto, RoleAssignmentDto,
    RoleAssignmentPageResponse, RoleResponse,
};

impl From<RoleAssignment> for RoleAssignmentDto {
    fn from(value: RoleAssignment) -> Self {
        Self {
            role_id: value.role_id,
            program_id: value.program_id,
            supervisory_node_id: value.supervisory_node_id,
            warehouse_id: value.warehouse_id,
            role_name: value.role_name,
            program_name: value.program_name,
            supervisory_node_name: value.supervisory_node_name,
            warehouse_name: value.warehouse_name,
        }
    }
}

impl From<RoleAssignmentDto> for RoleAssignment {
    fn from(value: RoleAssignmentDto) -> Self {
        Self {
            role_id: value.role_id,
            program_id: value.program_id,
            supervisory_node_id: value.supervisory_node_id,
            warehouse_id: value.warehouse_id,
            role_name: value.role_name,
            program_name: value.program_name,
            supervisory_node_name: value.supervisory_node_name,
            warehouse_name: value.warehouse_name,
        }
    }
}

impl From<RoleAssignmentDraftDto> for RoleAssignmentDraft {
    fn from(value: RoleAssignmentDraftDto) -> Self {
        Self {
            role_id: value.role_id,
            program_id: value.program_id,
            supervisory_node_id: value.supervisory_node_id,
            warehouse_id: value.warehouse_id,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let level = match value.level {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Info => "info",
        };

        Self {
            level,
            message_key: value.message_key,
        }
    }
}

impl From<RoleAssignmentPage> for RoleAssignmentPageResponse {
    fn from(value: RoleAssignmentPage) -> Self {
        Self {
            available_roles: value
                .available_roles
                .into_iter()
                .map(RoleResponse::from)
                .collect(),
            rows: value
                .rows
                .into_iter()
                .map(RoleAssignmentDto::from)
                .collect(),
            total: value.total,
            page: value.page_index,
            page_size: value.page_size,
        }
    }
}

impl From<ImportSummary> for ImportSummaryResponse {
    fn from(value: ImportSummary) -> Self {
        Self {
            assignments: value
                .assignments
                .into_iter()
                .map(RoleAssignmentDto::from)
                .collect(),
            imported: value.imported,
            skipped: value.skipped,
        }
    }
}
