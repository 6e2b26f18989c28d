use axum::Router;
use axum::routing::{get, post, put};
use lmis_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    let api_routes = Router::new()
        .route(
            "/api/right-types",
            get(handlers::users::list_right_types_handler),
        )
        .route(
            "/api/reference-data",
            get(handlers::role_assignments::add_form_options_handler),
        )
        .route("/api/users", get(handlers::users::list_users_handler))
        .route(
            "/api/users/{user_id}/roles",
            get(handlers::role_assignments::role_assignment_page_handler),
        )
        .route(
            "/api/users/{user_id}/role-assignments",
            put(handlers::role_assignments::save_role_assignments_handler),
        )
        .route(
            "/api/users/{user_id}/role-assignments/import",
            post(handlers::role_assignments::import_role_assignments_handler),
        )
        .route(
            "/api/role-assignments/add",
            post(handlers::role_assignments::add_role_assignment_handler),
        )
        .route(
            "/api/role-assignments/remove",
            post(handlers::role_assignments::remove_role_assignment_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
