use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use lmis_core::AppError;
use lmis_infrastructure::HttpBackendConfig;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Where user and reference data come from.
#[derive(Debug, Clone)]
pub enum BackendProviderConfig {
    /// Seeded in-memory adapters for local development.
    Memory,
    /// Remote LMIS REST backend.
    Http(HttpBackendConfig),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub backend: BackendProviderConfig,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let backend = match env::var("BACKEND_PROVIDER")
            .unwrap_or_else(|_| "memory".to_owned())
            .as_str()
        {
            "memory" => BackendProviderConfig::Memory,
            "http" => BackendProviderConfig::Http(load_http_backend()?),
            other => {
                return Err(AppError::Validation(format!(
                    "BACKEND_PROVIDER must be either 'memory' or 'http', got '{other}'"
                )));
            }
        };

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            backend,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

fn load_http_backend() -> Result<HttpBackendConfig, AppError> {
    let base_url = Url::parse(required_non_empty_env("BACKEND_BASE_URL")?.as_str())
        .map_err(|error| AppError::Validation(format!("invalid BACKEND_BASE_URL: {error}")))?;
    let access_token = required_non_empty_env("BACKEND_ACCESS_TOKEN")?;
    let timeout_secs = match env::var("BACKEND_TIMEOUT_SECS") {
        Ok(value) => value.trim().parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid BACKEND_TIMEOUT_SECS: {error}"))
        })?,
        Err(_) => DEFAULT_BACKEND_TIMEOUT_SECS,
    };

    Ok(HttpBackendConfig {
        base_url,
        access_token,
        timeout: Duration::from_secs(timeout_secs),
    })
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lmis_api=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use lmis_core::AppError;

    use super::{ApiConfig, BackendProviderConfig};

    fn config(api_host: &str) -> ApiConfig {
        ApiConfig {
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: api_host.to_owned(),
            api_port: 3001,
            backend: BackendProviderConfig::Memory,
        }
    }

    #[test]
    fn socket_address_combines_host_and_port() {
        let address = config("0.0.0.0").socket_address();

        assert_eq!(
            address.map(|value| value.to_string()).unwrap_or_default(),
            "0.0.0.0:3001"
        );
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        let address = config("localhost").socket_address();

        assert!(matches!(address, Err(AppError::Validation(_))));
    }
}
