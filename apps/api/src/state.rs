use lmis_application::UserRolesService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_roles_service: UserRolesService,
}
