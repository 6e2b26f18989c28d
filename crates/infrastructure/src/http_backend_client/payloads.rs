use std::str::FromStr;

use lmis_domain::{Right, RightType, Role, User, UserId};
use serde::Deserialize;
use tracing::debug;

/// Paginated listing envelope returned by the backend.
#[derive(Debug, Deserialize)]
pub(super) struct PagePayload<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default = "default_last")]
    pub last: bool,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<usize>,
}

impl<T> PagePayload<T> {
    pub fn is_final(&self, page: usize) -> bool {
        self.last
            || self.content.is_empty()
            || self.total_pages.is_some_and(|total| page + 1 >= total)
    }
}

fn default_last() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RightPayload {
    id: String,
    name: String,
    #[serde(rename = "type")]
    right_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RolePayload {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rights: Vec<RightPayload>,
}

impl From<RolePayload> for Role {
    fn from(value: RolePayload) -> Self {
        let role_id = value.id;
        let rights = value
            .rights
            .into_iter()
            .filter_map(|right| match RightType::from_str(right.right_type.as_str()) {
                Ok(right_type) => Some(Right {
                    id: right.id,
                    name: right.name,
                    right_type,
                }),
                Err(_) => {
                    debug!(
                        role_id = role_id.as_str(),
                        right_type = right.right_type.as_str(),
                        "ignoring right with unsupported type"
                    );
                    None
                }
            })
            .collect();

        Self {
            id: role_id,
            name: value.name,
            description: value.description,
            rights,
        }
    }
}

/// User listing row; listings do not carry role assignments.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserSummaryPayload {
    id: UserId,
    username: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    active: bool,
}

impl From<UserSummaryPayload> for User {
    fn from(value: UserSummaryPayload) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            active: value.active,
            role_assignments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lmis_domain::{Facility, RightType, Role, User};

    use super::{PagePayload, RolePayload, UserSummaryPayload};

    #[test]
    fn role_payload_drops_unsupported_rights() {
        let payload = serde_json::from_str::<RolePayload>(
            r#"{
                "id": "r1",
                "name": "Storeroom Manager",
                "rights": [
                    { "id": "a", "name": "PODS_MANAGE", "type": "ORDER_FULFILLMENT", "attachments": [] },
                    { "id": "b", "name": "FUTURE", "type": "FISCAL" }
                ]
            }"#,
        );
        assert!(payload.is_ok());

        let role = payload.map(Role::from).unwrap_or_else(|_| unreachable!());
        assert_eq!(role.rights.len(), 1);
        assert!(role.grants(RightType::OrderFulfillment));
    }

    #[test]
    fn user_summary_has_no_assignments() {
        let payload = serde_json::from_str::<UserSummaryPayload>(
            r#"{
                "id": "6f1d2f38-3c1a-4a35-9d5c-2a8d40f9b1e1",
                "username": "administrator",
                "firstName": "Admin",
                "timezone": "UTC",
                "active": true
            }"#,
        );
        assert!(payload.is_ok());

        let user = payload.map(User::from).unwrap_or_else(|_| unreachable!());
        assert_eq!(user.username, "administrator");
        assert!(user.role_assignments.is_empty());
    }

    #[test]
    fn page_defaults_to_last_without_flag() {
        let page = serde_json::from_str::<PagePayload<Facility>>(
            r#"{ "content": [{ "id": "w1", "name": "Central Warehouse", "active": true }] }"#,
        );
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert!(page.last);
        assert_eq!(page.content.len(), 1);
    }

    #[test]
    fn page_is_final_at_total_pages() {
        let page = serde_json::from_str::<PagePayload<Facility>>(
            r#"{
                "content": [{ "id": "w1", "name": "Central Warehouse" }],
                "last": false,
                "totalPages": 2
            }"#,
        );
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert!(!page.is_final(0));
        assert!(page.is_final(1));
    }
}
