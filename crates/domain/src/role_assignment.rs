use lmis_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{RightType, RightTypeSelector};

/// One role held by a user, optionally scoped.
///
/// Which scope fields are present depends on the right type of the role.
/// Name fields are display projections resolved from reference data and
/// never take part in identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Assigned role identifier.
    pub role_id: String,
    /// Program scope for supervision roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    /// Supervisory node scope for supervision roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisory_node_id: Option<String>,
    /// Warehouse scope for order fulfillment roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
    /// Display name of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    /// Display name of the program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    /// Display name of the supervisory node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisory_node_name: Option<String>,
    /// Display name of the warehouse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
}

/// Right type family inferred from the scope fields an assignment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentShape {
    /// Program or supervisory node present.
    Supervision,
    /// Warehouse present.
    OrderFulfillment,
    /// No scope; reports or general admin.
    RoleOnly,
}

impl RoleAssignment {
    /// Creates an unscoped assignment.
    #[must_use]
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            ..Self::default()
        }
    }

    /// Creates a supervision assignment.
    #[must_use]
    pub fn supervision(
        role_id: impl Into<String>,
        program_id: impl Into<String>,
        supervisory_node_id: Option<String>,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            program_id: Some(program_id.into()),
            supervisory_node_id,
            ..Self::default()
        }
    }

    /// Creates an order fulfillment assignment.
    #[must_use]
    pub fn fulfillment(role_id: impl Into<String>, warehouse_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            warehouse_id: Some(warehouse_id.into()),
            ..Self::default()
        }
    }

    /// Infers the right type family from the populated scope fields.
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn shape(&self) -> AssignmentShape {
        if is_set(&self.program_id) || is_set(&self.supervisory_node_id) {
            AssignmentShape::Supervision
        } else if is_set(&self.warehouse_id) {
            AssignmentShape::OrderFulfillment
        } else {
            AssignmentShape::RoleOnly
        }
    }

    /// Returns a copy carrying only identity fields.
    #[must_use]
    pub fn without_display_fields(&self) -> Self {
        Self {
            role_id: self.role_id.clone(),
            program_id: self.program_id.clone(),
            supervisory_node_id: self.supervisory_node_id.clone(),
            warehouse_id: self.warehouse_id.clone(),
            ..Self::default()
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|value| !value.is_empty())
}

/// Field values submitted by the add-role form of a right type tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentDraft {
    /// Selected role.
    #[serde(default)]
    pub role_id: String,
    /// Selected program.
    #[serde(default)]
    pub program_id: Option<String>,
    /// Selected supervisory node.
    #[serde(default)]
    pub supervisory_node_id: Option<String>,
    /// Selected supplying facility.
    #[serde(default)]
    pub warehouse_id: Option<String>,
}

impl RoleAssignmentDraft {
    /// Validates the draft for the tab and builds the candidate assignment.
    ///
    /// Scope fields the right type does not use are dropped.
    pub fn into_candidate(self, selector: &RightTypeSelector) -> AppResult<RoleAssignment> {
        let Some(right_type) = selector.right_type() else {
            return Err(AppError::Validation(format!(
                "cannot add roles on unknown right type '{}'",
                selector.as_str()
            )));
        };

        let role_id = NonEmptyString::new(self.role_id)
            .map_err(|_| AppError::Validation("a role must be selected".to_owned()))?;

        match right_type {
            RightType::Supervision => {
                let program_id = required(self.program_id, "program")?;
                let supervisory_node_id = self
                    .supervisory_node_id
                    .filter(|value| !value.trim().is_empty());
                Ok(RoleAssignment::supervision(
                    role_id,
                    program_id,
                    supervisory_node_id,
                ))
            }
            RightType::OrderFulfillment => {
                let warehouse_id = required(self.warehouse_id, "supplying facility")?;
                Ok(RoleAssignment::fulfillment(role_id, warehouse_id))
            }
            RightType::Reports | RightType::GeneralAdmin => Ok(RoleAssignment::new(role_id)),
        }
    }
}

fn required(value: Option<String>, label: &str) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value.unwrap_or_default())
        .map_err(|_| AppError::Validation(format!("a {label} must be selected")))
}
