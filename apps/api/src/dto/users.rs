use lmis_domain::{Role, User};
use serde::Serialize;
use ts_rs::TS;

/// API representation of a user in the import source picker.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-summary-response.ts"
)]
pub struct UserSummaryResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub active: bool,
}

/// API representation of a catalog role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub right_type: Option<String>,
}

impl From<User> for UserSummaryResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.to_string(),
            display_name: value.display_name(),
            username: value.username,
            active: value.active,
        }
    }
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            right_type: value
                .right_type()
                .map(|right_type| right_type.as_str().to_owned()),
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}
