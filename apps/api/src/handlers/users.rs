use axum::Json;
use axum::extract::State;
use lmis_domain::RightType;

use crate::dto::{RightTypeResponse, UserSummaryResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_right_types_handler() -> Json<Vec<RightTypeResponse>> {
    Json(
        RightType::all()
            .iter()
            .copied()
            .map(RightTypeResponse::from)
            .collect(),
    )
}

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserSummaryResponse>>> {
    let users = state
        .user_roles_service
        .list_users()
        .await?
        .into_iter()
        .map(UserSummaryResponse::from)
        .collect();

    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::State;

    use super::{list_right_types_handler, list_users_handler};
    use crate::api_config::{ApiConfig, BackendProviderConfig};
    use crate::api_services::build_app_state;

    #[tokio::test]
    async fn right_types_follow_tab_order() {
        let Json(right_types) = list_right_types_handler().await;

        let names: Vec<&str> = right_types
            .iter()
            .map(|right_type| right_type.right_type.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["SUPERVISION", "REPORTS", "GENERAL_ADMIN", "ORDER_FULFILLMENT"]
        );
        assert!(right_types[0].requires_program);
        assert!(!right_types[0].requires_warehouse);
        assert!(right_types[3].requires_warehouse);
    }

    #[tokio::test]
    async fn users_are_listed_by_username() {
        let state = build_app_state(&ApiConfig {
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: "127.0.0.1".to_owned(),
            api_port: 3001,
            backend: BackendProviderConfig::Memory,
        })
        .unwrap_or_else(|_| unreachable!());

        let response = list_users_handler(State(state)).await;

        assert!(response.is_ok());
        let Json(users) = response.unwrap_or_else(|_| unreachable!());
        let usernames: Vec<&str> = users.iter().map(|user| user.username.as_str()).collect();
        assert_eq!(usernames, vec!["administrator", "srmanager2", "wclerk1"]);
        assert_eq!(users[0].display_name, "Admin User");
        assert_eq!(users[2].display_name, "wclerk1");
    }
}
