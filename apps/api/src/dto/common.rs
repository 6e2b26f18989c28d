use lmis_domain::RightType;
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One right type tab and the scope fields its drafts need.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/right-type-response.ts"
)]
pub struct RightTypeResponse {
    pub right_type: String,
    pub requires_program: bool,
    pub requires_supervisory_node: bool,
    pub requires_warehouse: bool,
}

impl From<RightType> for RightTypeResponse {
    fn from(value: RightType) -> Self {
        let scope = value.scope_requirements();
        Self {
            right_type: value.as_str().to_owned(),
            requires_program: scope.program,
            requires_supervisory_node: scope.supervisory_node,
            requires_warehouse: scope.warehouse,
        }
    }
}
