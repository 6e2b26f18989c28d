use lmis_application::AddFormOptions;
use lmis_domain::{Facility, Program, SupervisoryNode};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::RoleResponse;

/// Query string of the add-form options lookup.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/add-form-options-query.ts"
)]
pub struct AddFormOptionsQuery {
    #[serde(rename = "type")]
    pub right_type: String,
}

/// One entry of a program, supervisory node or facility picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/reference-option-response.ts"
)]
pub struct ReferenceOptionResponse {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
}

/// Pickers of the add-role form for one tab.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/add-form-options-response.ts"
)]
pub struct AddFormOptionsResponse {
    pub roles: Vec<RoleResponse>,
    pub programs: Vec<ReferenceOptionResponse>,
    pub supervisory_nodes: Vec<ReferenceOptionResponse>,
    pub warehouses: Vec<ReferenceOptionResponse>,
}

impl From<Program> for ReferenceOptionResponse {
    fn from(value: Program) -> Self {
        Self {
            id: value.id,
            name: value.name,
            code: value.code,
        }
    }
}

impl From<SupervisoryNode> for ReferenceOptionResponse {
    fn from(value: SupervisoryNode) -> Self {
        Self {
            id: value.id,
            name: value.name,
            code: value.code,
        }
    }
}

impl From<Facility> for ReferenceOptionResponse {
    fn from(value: Facility) -> Self {
        Self {
            id: value.id,
            name: value.name,
            code: value.code,
        }
    }
}

impl From<AddFormOptions> for AddFormOptionsResponse {
    fn from(value: AddFormOptions) -> Self {
        Self {
            roles: value.roles.into_iter().map(RoleResponse::from).collect(),
            programs: value
                .programs
                .into_iter()
                .map(ReferenceOptionResponse::from)
                .collect(),
            supervisory_nodes: value
                .supervisory_nodes
                .into_iter()
                .map(ReferenceOptionResponse::from)
                .collect(),
            warehouses: value
                .warehouses
                .into_iter()
                .map(ReferenceOptionResponse::from)
                .collect(),
        }
    }
}
