use std::sync::Arc;

use lmis_application::UserRolesService;
use lmis_core::AppError;
use lmis_infrastructure::HttpBackendClient;
use tracing::info;

use crate::api_config::{ApiConfig, BackendProviderConfig};
use crate::dev_seed;
use crate::state::AppState;

pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let user_roles_service = match &config.backend {
        BackendProviderConfig::Memory => {
            let (users, reference_data) = dev_seed::seeded_repositories()?;
            info!("using seeded in-memory backend");
            UserRolesService::new(Arc::new(users), Arc::new(reference_data))
        }
        BackendProviderConfig::Http(backend) => {
            info!(base_url = %backend.base_url, "using REST backend");
            let client = Arc::new(HttpBackendClient::new(backend.clone())?);
            UserRolesService::new(client.clone(), client)
        }
    };

    Ok(AppState { user_roles_service })
}
