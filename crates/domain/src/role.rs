use serde::{Deserialize, Serialize};

use crate::RightType;

/// Atomic permission grant carried by a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Right {
    /// Stable right identifier.
    pub id: String,
    /// Right name.
    pub name: String,
    /// Right type the grant belongs to.
    #[serde(rename = "type")]
    pub right_type: RightType,
}

/// Named bundle of rights from the role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Stable role identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Rights granted by the role.
    #[serde(default)]
    pub rights: Vec<Right>,
}

impl Role {
    /// Returns whether any right of the role has the given type.
    #[must_use]
    pub fn grants(&self, right_type: RightType) -> bool {
        self.rights
            .iter()
            .any(|right| right.right_type == right_type)
    }

    /// Returns the right type of the role, taken from its first right.
    #[must_use]
    pub fn right_type(&self) -> Option<RightType> {
        self.rights.first().map(|right| right.right_type)
    }
}

/// Returns the roles assignable on a right type tab, in catalog order.
#[must_use]
pub fn roles_for_right_type(roles: &[Role], right_type: RightType) -> Vec<Role> {
    roles
        .iter()
        .filter(|role| role.grants(right_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Right, Role, roles_for_right_type};
    use crate::RightType;

    fn role(id: &str, right_types: &[RightType]) -> Role {
        Role {
            id: id.to_owned(),
            name: format!("Role {id}"),
            description: None,
            rights: right_types
                .iter()
                .enumerate()
                .map(|(index, right_type)| Right {
                    id: format!("{id}-right-{index}"),
                    name: format!("{right_type} right"),
                    right_type: *right_type,
                })
                .collect(),
        }
    }

    #[test]
    fn role_grants_matches_any_right() {
        let storeroom = role("storeroom", &[RightType::OrderFulfillment]);
        assert!(storeroom.grants(RightType::OrderFulfillment));
        assert!(!storeroom.grants(RightType::Supervision));
        assert_eq!(storeroom.right_type(), Some(RightType::OrderFulfillment));
    }

    #[test]
    fn role_without_rights_has_no_right_type() {
        assert_eq!(role("empty", &[]).right_type(), None);
    }

    #[test]
    fn tab_roles_keep_catalog_order() {
        let roles = vec![
            role("b", &[RightType::Reports]),
            role("a", &[RightType::Supervision]),
            role("c", &[RightType::Reports]),
        ];

        let available = roles_for_right_type(&roles, RightType::Reports);
        let ids: Vec<&str> = available.iter().map(|role| role.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn role_deserializes_backend_payload() {
        let payload = r#"{
            "id": "r1",
            "name": "Program Supervisor",
            "description": "Approves requisitions",
            "rights": [{ "id": "x", "name": "REQUISITION_APPROVE", "type": "SUPERVISION" }]
        }"#;

        let parsed = serde_json::from_str::<Role>(payload);
        assert!(parsed.is_ok());
        let parsed = parsed.unwrap_or_else(|_| unreachable!());
        assert!(parsed.grants(RightType::Supervision));
    }
}
