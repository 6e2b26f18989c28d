//! Reference data used to label role assignments for display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Role, RoleAssignment};

/// Program a supervision assignment can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Stable program identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short program code.
    #[serde(default)]
    pub code: Option<String>,
}

/// Node of the supervision hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisoryNode {
    /// Stable node identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short node code.
    #[serde(default)]
    pub code: Option<String>,
}

/// Supplying facility an order fulfillment assignment can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// Stable facility identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short facility code.
    #[serde(default)]
    pub code: Option<String>,
}

/// Id-to-name lookups over one snapshot of reference data.
///
/// Lookups are display-only; identity never consults them.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    roles: Vec<Role>,
    role_index: HashMap<String, usize>,
    programs: HashMap<String, String>,
    supervisory_nodes: HashMap<String, String>,
    facilities: HashMap<String, String>,
}

impl ReferenceData {
    /// Builds lookups from catalog listings.
    #[must_use]
    pub fn new(
        roles: Vec<Role>,
        programs: Vec<Program>,
        supervisory_nodes: Vec<SupervisoryNode>,
        facilities: Vec<Facility>,
    ) -> Self {
        let role_index = roles
            .iter()
            .enumerate()
            .map(|(index, role)| (role.id.clone(), index))
            .collect();

        Self {
            roles,
            role_index,
            programs: programs
                .into_iter()
                .map(|program| (program.id, program.name))
                .collect(),
            supervisory_nodes: supervisory_nodes
                .into_iter()
                .map(|node| (node.id, node.name))
                .collect(),
            facilities: facilities
                .into_iter()
                .map(|facility| (facility.id, facility.name))
                .collect(),
        }
    }

    /// Returns the role catalog in listing order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        self.roles.as_slice()
    }

    /// Returns the catalog role for an id.
    #[must_use]
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.role_index
            .get(role_id)
            .and_then(|index| self.roles.get(*index))
    }

    /// Returns a copy of the assignment with display names resolved.
    ///
    /// Unknown ids leave the corresponding name empty.
    #[must_use]
    pub fn describe_assignment(&self, assignment: &RoleAssignment) -> RoleAssignment {
        let lookup = |names: &HashMap<String, String>, id: &Option<String>| {
            id.as_deref().and_then(|id| names.get(id)).cloned()
        };

        RoleAssignment {
            role_name: self.role(assignment.role_id.as_str()).map(|role| role.name.clone()),
            program_name: lookup(&self.programs, &assignment.program_id),
            supervisory_node_name: lookup(&self.supervisory_nodes, &assignment.supervisory_node_id),
            warehouse_name: lookup(&self.facilities, &assignment.warehouse_id),
            ..assignment.without_display_fields()
        }
    }
}
