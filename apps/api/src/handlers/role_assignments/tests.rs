use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use lmis_core::AppError;
use serde_json::json;

use super::{
    add_form_options_handler, add_role_assignment_handler, import_role_assignments_handler, remove_role_assignment_handler,
    role_assignment_page_handler, save_role_assignments_handler,
};
use crate::api_config::{ApiConfig, BackendProviderConfig};
use crate::api_services::build_app_state;
use crate::dev_seed::{
    DEV_SEED_ADMIN_USER_ID, DEV_SEED_CLERK_USER_ID, DEV_SEED_NODE_FP_APPROVAL,
    DEV_SEED_PROGRAM_ESSENTIAL_MEDS, DEV_SEED_PROGRAM_FAMILY_PLANNING,
    DEV_SEED_ROLE_PROGRAM_SUPERVISOR, DEV_SEED_ROLE_REPORTS_VIEWER,
    DEV_SEED_ROLE_REQUISITION_APPROVER, DEV_SEED_ROLE_STOREROOM_MANAGER,
    DEV_SEED_STOREROOM_USER_ID, DEV_SEED_WAREHOUSE_NINITAZ, DEV_SEED_WAREHOUSE_RAMONA,
};
use crate::dto::{
    AddFormOptionsQuery, AddRoleAssignmentRequest, ImportRoleAssignmentsRequest, RemoveRoleAssignmentRequest,
    RoleAssignmentDraftDto, RoleAssignmentDto, RoleAssignmentPageQuery, SaveRoleAssignmentsRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

fn seeded_state() -> AppState {
    build_app_state(&ApiConfig {
        frontend_url: "http://localhost:3000".to_owned(),
        api_host: "127.0.0.1".to_owned(),
        api_port: 3001,
        backend: BackendProviderConfig::Memory,
    })
    .unwrap_or_else(|_| unreachable!())
}

fn page_query(right_type: &str) -> RoleAssignmentPageQuery {
    RoleAssignmentPageQuery {
        right_type: right_type.to_owned(),
        search: None,
        page: None,
        page_size: None,
    }
}

fn add_request(value: serde_json::Value) -> AddRoleAssignmentRequest {
    serde_json::from_value(value).unwrap_or_else(|_| unreachable!())
}

fn remove_request(value: serde_json::Value) -> RemoveRoleAssignmentRequest {
    serde_json::from_value(value).unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn page_resolves_display_names_for_supervision_tab() {
    let response = role_assignment_page_handler(
        State(seeded_state()),
        Path(DEV_SEED_ADMIN_USER_ID.to_owned()),
        Query(page_query("SUPERVISION")),
    )
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(payload.total, 1);
    assert_eq!(payload.page_size, 5);
    assert_eq!(payload.available_roles.len(), 2);
    assert_eq!(payload.rows[0].role_name.as_deref(), Some("Program Supervisor"));
    assert_eq!(payload.rows[0].program_name.as_deref(), Some("Family Planning"));
    assert_eq!(
        payload.rows[0].supervisory_node_name.as_deref(),
        Some("FP approval point")
    );
}

#[tokio::test]
async fn page_rejects_malformed_user_id() {
    let response = role_assignment_page_handler(
        State(seeded_state()),
        Path("not-a-uuid".to_owned()),
        Query(page_query("REPORTS")),
    )
    .await;

    assert!(matches!(response, Err(ApiError(AppError::Validation(_)))));
}

#[tokio::test]
async fn page_for_unknown_user_is_not_found() {
    let response = role_assignment_page_handler(
        State(seeded_state()),
        Path("00000000-0000-0000-0000-000000000000".to_owned()),
        Query(page_query("REPORTS")),
    )
    .await;

    assert!(matches!(response, Err(ApiError(AppError::NotFound(_)))));
}

#[tokio::test]
async fn add_appends_draft_then_reports_duplicate() {
    let first = add_role_assignment_handler(Json(add_request(json!({
        "type": "SUPERVISION",
        "current": [],
        "draft": {
            "role_id": DEV_SEED_ROLE_PROGRAM_SUPERVISOR,
            "program_id": DEV_SEED_PROGRAM_FAMILY_PLANNING,
            "supervisory_node_id": DEV_SEED_NODE_FP_APPROVAL
        }
    }))))
    .await;

    assert!(first.is_ok());
    let Json(first) = first.unwrap_or_else(|_| unreachable!());
    assert_eq!(first.notification.level, "success");
    assert_eq!(first.notification.message_key, "roleAdded");
    assert_eq!(first.assignments.len(), 1);

    let second = add_role_assignment_handler(Json(AddRoleAssignmentRequest {
        right_type: "SUPERVISION".to_owned(),
        current: first.assignments.clone(),
        draft: RoleAssignmentDraftDto {
            role_id: DEV_SEED_ROLE_PROGRAM_SUPERVISOR.to_owned(),
            program_id: Some(DEV_SEED_PROGRAM_FAMILY_PLANNING.to_owned()),
            supervisory_node_id: Some(DEV_SEED_NODE_FP_APPROVAL.to_owned()),
            warehouse_id: None,
        },
    }))
    .await;

    assert!(second.is_ok());
    let Json(second) = second.unwrap_or_else(|_| unreachable!());
    assert_eq!(second.notification.level, "error");
    assert_eq!(second.notification.message_key, "roleAlreadyAssigned");
    assert_eq!(second.assignments, first.assignments);
}

#[tokio::test]
async fn add_drops_scope_fields_the_tab_does_not_use() {
    let response = add_role_assignment_handler(Json(add_request(json!({
        "type": "REPORTS",
        "draft": {
            "role_id": DEV_SEED_ROLE_REPORTS_VIEWER,
            "warehouse_id": DEV_SEED_WAREHOUSE_NINITAZ
        }
    }))))
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(
        payload.assignments,
        vec![RoleAssignmentDto {
            role_id: DEV_SEED_ROLE_REPORTS_VIEWER.to_owned(),
            ..RoleAssignmentDto::default()
        }]
    );
}

#[tokio::test]
async fn add_rejects_incomplete_draft() {
    let missing_role = add_role_assignment_handler(Json(add_request(json!({
        "type": "REPORTS",
        "draft": { "role_id": "  " }
    }))))
    .await;
    assert!(matches!(missing_role, Err(ApiError(AppError::Validation(_)))));

    let missing_warehouse = add_role_assignment_handler(Json(add_request(json!({
        "type": "ORDER_FULFILLMENT",
        "draft": { "role_id": DEV_SEED_ROLE_STOREROOM_MANAGER }
    }))))
    .await;
    assert!(matches!(
        missing_warehouse,
        Err(ApiError(AppError::Validation(_)))
    ));
}

#[tokio::test]
async fn remove_drops_target_and_reports_success() {
    let response = remove_role_assignment_handler(Json(remove_request(json!({
        "type": "ORDER_FULFILLMENT",
        "current": [
            { "role_id": DEV_SEED_ROLE_STOREROOM_MANAGER, "warehouse_id": DEV_SEED_WAREHOUSE_NINITAZ },
            { "role_id": DEV_SEED_ROLE_REPORTS_VIEWER }
        ],
        "target": {
            "role_id": DEV_SEED_ROLE_STOREROOM_MANAGER,
            "warehouse_id": DEV_SEED_WAREHOUSE_NINITAZ,
            "warehouse_name": "Ninitaz Warehouse"
        }
    }))))
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(payload.notification.message_key, "roleRemovedSuccess");
    assert_eq!(payload.assignments.len(), 1);
    assert_eq!(payload.assignments[0].role_id, DEV_SEED_ROLE_REPORTS_VIEWER);
}

#[tokio::test]
async fn remove_on_unknown_tab_keeps_list() {
    let response = remove_role_assignment_handler(Json(remove_request(json!({
        "type": "FISCAL",
        "current": [{ "role_id": DEV_SEED_ROLE_REPORTS_VIEWER }],
        "target": { "role_id": DEV_SEED_ROLE_REPORTS_VIEWER }
    }))))
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(payload.notification.level, "error");
    assert_eq!(payload.notification.message_key, "unknownRightType");
    assert_eq!(payload.assignments.len(), 1);
}

#[tokio::test]
async fn save_replaces_assignments() {
    let state = seeded_state();

    let saved = save_role_assignments_handler(
        State(state.clone()),
        Path(DEV_SEED_CLERK_USER_ID.to_owned()),
        Json(SaveRoleAssignmentsRequest {
            assignments: vec![RoleAssignmentDto {
                role_id: DEV_SEED_ROLE_REPORTS_VIEWER.to_owned(),
                role_name: Some("Reports Viewer".to_owned()),
                ..RoleAssignmentDto::default()
            }],
        }),
    )
    .await;

    assert!(matches!(saved, Ok(StatusCode::NO_CONTENT)));

    let page = role_assignment_page_handler(
        State(state),
        Path(DEV_SEED_CLERK_USER_ID.to_owned()),
        Query(page_query("REPORTS")),
    )
    .await;
    assert!(page.is_ok());
    let Json(page) = page.unwrap_or_else(|_| unreachable!());
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].role_name.as_deref(), Some("Reports Viewer"));
}

#[tokio::test]
async fn import_merges_source_assignments() {
    let response = import_role_assignments_handler(
        State(seeded_state()),
        Path(DEV_SEED_ADMIN_USER_ID.to_owned()),
        Json(ImportRoleAssignmentsRequest {
            source_user_id: DEV_SEED_STOREROOM_USER_ID.to_owned(),
        }),
    )
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(payload.imported, 3);
    assert_eq!(payload.skipped, 1);
    assert_eq!(payload.assignments.len(), 6);
    assert!(payload.assignments.iter().any(|assignment| {
        assignment.program_id.as_deref() == Some(DEV_SEED_PROGRAM_ESSENTIAL_MEDS)
    }));
}

#[tokio::test]
async fn import_rejects_malformed_source_id() {
    let response = import_role_assignments_handler(
        State(seeded_state()),
        Path(DEV_SEED_ADMIN_USER_ID.to_owned()),
        Json(ImportRoleAssignmentsRequest {
            source_user_id: "srmanager2".to_owned(),
        }),
    )
    .await;

    assert!(matches!(response, Err(ApiError(AppError::Validation(_)))));
}

fn options_query(right_type: &str) -> AddFormOptionsQuery {
    AddFormOptionsQuery {
        right_type: right_type.to_owned(),
    }
}

#[tokio::test]
async fn reference_data_for_supervision_offers_programs_and_nodes() {
    let response =
        add_form_options_handler(State(seeded_state()), Query(options_query("SUPERVISION"))).await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    let role_ids = payload
        .roles
        .iter()
        .map(|role| role.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        role_ids,
        vec![
            DEV_SEED_ROLE_PROGRAM_SUPERVISOR,
            DEV_SEED_ROLE_REQUISITION_APPROVER
        ]
    );
    assert_eq!(payload.programs.len(), 2);
    assert_eq!(payload.supervisory_nodes.len(), 1);
    assert_eq!(payload.supervisory_nodes[0].id, DEV_SEED_NODE_FP_APPROVAL);
    assert!(payload.warehouses.is_empty());
}

#[tokio::test]
async fn reference_data_for_fulfillment_offers_warehouses_only() {
    let response = add_form_options_handler(
        State(seeded_state()),
        Query(options_query("ORDER_FULFILLMENT")),
    )
    .await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(payload.roles.len(), 1);
    assert_eq!(payload.roles[0].id, DEV_SEED_ROLE_STOREROOM_MANAGER);
    assert!(payload.programs.is_empty());
    assert!(payload.supervisory_nodes.is_empty());
    let warehouse_ids = payload
        .warehouses
        .iter()
        .map(|warehouse| warehouse.id.as_str())
        .collect::<Vec<_>>();
    assert!(warehouse_ids.contains(&DEV_SEED_WAREHOUSE_RAMONA));
    assert!(warehouse_ids.contains(&DEV_SEED_WAREHOUSE_NINITAZ));
}

#[tokio::test]
async fn reference_data_for_unknown_tab_is_empty() {
    let response =
        add_form_options_handler(State(seeded_state()), Query(options_query("FISCAL"))).await;

    assert!(response.is_ok());
    let Json(payload) = response.unwrap_or_else(|_| unreachable!());
    assert!(payload.roles.is_empty());
    assert!(payload.programs.is_empty());
    assert!(payload.warehouses.is_empty());
}
