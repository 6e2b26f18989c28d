use std::str::FromStr;

use lmis_core::AppResult;
use lmis_domain::{
    Facility, Program, Right, RightType, Role, RoleAssignment, SupervisoryNode, User, UserId,
};
use lmis_infrastructure::{InMemoryReferenceDataRepository, InMemoryUserRepository};
use tracing::info;

pub const DEV_SEED_ADMIN_USER_ID: &str = "a337ec45-31a0-4f2b-9b2e-a105c4b669bb";
pub const DEV_SEED_STOREROOM_USER_ID: &str = "e4c6c5a5-7c39-4bd1-8e35-7d8cbb0bfd4d";
pub const DEV_SEED_CLERK_USER_ID: &str = "96d11e90-7403-4654-9727-cb1043f8bd31";

pub const DEV_SEED_PROGRAM_FAMILY_PLANNING: &str = "dce17f2e-af3e-40ad-8e00-3496adef44c3";
pub const DEV_SEED_PROGRAM_ESSENTIAL_MEDS: &str = "10845cb9-d365-4aaa-badd-b4fa39c6a26a";
pub const DEV_SEED_NODE_FP_APPROVAL: &str = "fb38bd1c-beeb-4527-8345-900900329c10";
pub const DEV_SEED_WAREHOUSE_RAMONA: &str = "19121381-9f3d-4e77-b9e5-d3f59fc1639e";
pub const DEV_SEED_WAREHOUSE_NINITAZ: &str = "e6799d64-d10d-4011-b8c2-0e4d4a3f65ce";

pub const DEV_SEED_ROLE_STOREROOM_MANAGER: &str = "a439c5de-b8aa-11e6-80f5-76304dec7eb7";
pub const DEV_SEED_ROLE_PROGRAM_SUPERVISOR: &str = "a598b9c4-b8aa-11e6-80f5-76304dec7eb7";
pub const DEV_SEED_ROLE_REQUISITION_APPROVER: &str = "d3a8b8cc-0b8e-4d41-9c2d-8c2a1cbb5f10";
pub const DEV_SEED_ROLE_REPORTS_VIEWER: &str = "a6f5c2e0-b8aa-11e6-80f5-76304dec7eb7";
pub const DEV_SEED_ROLE_SYSTEM_ADMIN: &str = "a439c08c-b8aa-11e6-80f5-76304dec7eb7";

/// Builds in-memory adapters filled with a small demo catalog.
pub fn seeded_repositories() -> AppResult<(InMemoryUserRepository, InMemoryReferenceDataRepository)>
{
    let users = seed_users()?;
    info!(users = users.len(), "seeded in-memory user repository");

    let reference_data = InMemoryReferenceDataRepository::new()
        .with_roles(seed_roles())
        .with_programs(vec![
            program(DEV_SEED_PROGRAM_FAMILY_PLANNING, "Family Planning", "PRG001"),
            program(DEV_SEED_PROGRAM_ESSENTIAL_MEDS, "Essential Meds", "PRG002"),
        ])
        .with_supervisory_nodes(vec![SupervisoryNode {
            id: DEV_SEED_NODE_FP_APPROVAL.to_owned(),
            name: "FP approval point".to_owned(),
            code: Some("SN1".to_owned()),
        }])
        .with_facilities(vec![
            facility(DEV_SEED_WAREHOUSE_RAMONA, "Ramona Warehouse", "WH02"),
            facility(DEV_SEED_WAREHOUSE_NINITAZ, "Ninitaz Warehouse", "WH01"),
        ]);

    Ok((InMemoryUserRepository::with_users(users), reference_data))
}

fn seed_users() -> AppResult<Vec<User>> {
    Ok(vec![
        User {
            id: UserId::from_str(DEV_SEED_ADMIN_USER_ID)?,
            username: "administrator".to_owned(),
            first_name: Some("Admin".to_owned()),
            last_name: Some("User".to_owned()),
            active: true,
            role_assignments: vec![
                RoleAssignment::new(DEV_SEED_ROLE_SYSTEM_ADMIN),
                RoleAssignment::supervision(
                    DEV_SEED_ROLE_PROGRAM_SUPERVISOR,
                    DEV_SEED_PROGRAM_FAMILY_PLANNING,
                    Some(DEV_SEED_NODE_FP_APPROVAL.to_owned()),
                ),
                RoleAssignment::fulfillment(
                    DEV_SEED_ROLE_STOREROOM_MANAGER,
                    DEV_SEED_WAREHOUSE_NINITAZ,
                ),
            ],
        },
        User {
            id: UserId::from_str(DEV_SEED_STOREROOM_USER_ID)?,
            username: "srmanager2".to_owned(),
            first_name: Some("Storeroom".to_owned()),
            last_name: Some("Manager".to_owned()),
            active: true,
            role_assignments: vec![
                RoleAssignment::fulfillment(
                    DEV_SEED_ROLE_STOREROOM_MANAGER,
                    DEV_SEED_WAREHOUSE_NINITAZ,
                ),
                RoleAssignment::fulfillment(
                    DEV_SEED_ROLE_STOREROOM_MANAGER,
                    DEV_SEED_WAREHOUSE_RAMONA,
                ),
                RoleAssignment::supervision(
                    DEV_SEED_ROLE_REQUISITION_APPROVER,
                    DEV_SEED_PROGRAM_ESSENTIAL_MEDS,
                    None,
                ),
                RoleAssignment::new(DEV_SEED_ROLE_REPORTS_VIEWER),
            ],
        },
        User {
            id: UserId::from_str(DEV_SEED_CLERK_USER_ID)?,
            username: "wclerk1".to_owned(),
            first_name: None,
            last_name: None,
            active: true,
            role_assignments: Vec::new(),
        },
    ])
}

fn seed_roles() -> Vec<Role> {
    vec![
        role(
            DEV_SEED_ROLE_STOREROOM_MANAGER,
            "Storeroom Manager",
            RightType::OrderFulfillment,
        ),
        role(
            DEV_SEED_ROLE_PROGRAM_SUPERVISOR,
            "Program Supervisor",
            RightType::Supervision,
        ),
        role(
            DEV_SEED_ROLE_REQUISITION_APPROVER,
            "Requisition Approver",
            RightType::Supervision,
        ),
        role(
            DEV_SEED_ROLE_REPORTS_VIEWER,
            "Reports Viewer",
            RightType::Reports,
        ),
        role(
            DEV_SEED_ROLE_SYSTEM_ADMIN,
            "System Administrator",
            RightType::GeneralAdmin,
        ),
    ]
}

fn role(id: &str, name: &str, right_type: RightType) -> Role {
    Role {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        rights: vec![Right {
            id: format!("{id}:{}", right_type.as_str().to_lowercase()),
            name: format!("{name} rights"),
            right_type,
        }],
    }
}

fn program(id: &str, name: &str, code: &str) -> Program {
    Program {
        id: id.to_owned(),
        name: name.to_owned(),
        code: Some(code.to_owned()),
    }
}

fn facility(id: &str, name: &str, code: &str) -> Facility {
    Facility {
        id: id.to_owned(),
        name: name.to_owned(),
        code: Some(code.to_owned()),
    }
}
