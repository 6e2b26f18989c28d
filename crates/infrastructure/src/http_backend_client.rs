use std::time::Duration;

use async_trait::async_trait;
use lmis_application::{ReferenceDataRepository, UserRepository};
use lmis_core::{AppError, AppResult};
use lmis_domain::{Facility, Program, Role, RoleAssignment, SupervisoryNode, User, UserId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use url::Url;

mod payloads;

use payloads::{PagePayload, RolePayload, UserSummaryPayload};

const LISTING_PAGE_SIZE: usize = 200;
const MAX_LISTING_PAGES: usize = 100;

/// Connection settings for the REST backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Backend root, e.g. `https://lmis.example.org/`.
    pub base_url: Url,
    /// Bearer token issued by the identity provider.
    pub access_token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// REST backend adapter for users and reference data.
#[derive(Clone)]
pub struct HttpBackendClient {
    http_client: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl HttpBackendClient {
    /// Creates a client for the configured backend.
    pub fn new(config: HttpBackendConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            base_url: with_trailing_slash(config.base_url),
            access_token: config.access_token,
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| AppError::Internal(format!("invalid backend path '{path}': {error}")))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> AppResult<reqwest::Response> {
        let response = request
            .bearer_auth(self.access_token.as_str())
            .send()
            .await
            .map_err(|error| {
                warn!(path, %error, "backend request failed");
                AppError::Internal(format!("backend request to '{path}' failed: {error}"))
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());
        warn!(path, status = status.as_u16(), "backend rejected request");

        Err(match status {
            reqwest::StatusCode::NOT_FOUND => {
                AppError::NotFound(format!("backend resource '{path}' not found"))
            }
            reqwest::StatusCode::UNAUTHORIZED => {
                AppError::Unauthorized(format!("backend rejected credentials: {body}"))
            }
            reqwest::StatusCode::FORBIDDEN => {
                AppError::Forbidden(format!("backend refused '{path}': {body}"))
            }
            reqwest::StatusCode::BAD_REQUEST => AppError::Validation(body),
            _ => AppError::Internal(format!(
                "backend request to '{path}' failed with status {status}: {body}"
            )),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self.http_client.get(self.endpoint(path)?);
        self.send(request, path)
            .await?
            .json::<T>()
            .await
            .map_err(|error| {
                AppError::Internal(format!("invalid backend payload from '{path}': {error}"))
            })
    }

    async fn get_all_pages<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let mut items = Vec::new();
        let separator = if path.contains('?') { '&' } else { '?' };

        for page in 0..MAX_LISTING_PAGES {
            let page_path = format!("{path}{separator}page={page}&size={LISTING_PAGE_SIZE}");
            let payload: PagePayload<T> = self.get_json(page_path.as_str()).await?;
            let is_final = payload.is_final(page);
            items.extend(payload.content);

            if is_final {
                return Ok(items);
            }
        }

        warn!(path, pages = MAX_LISTING_PAGES, "backend listing never reached its last page");
        Err(AppError::Internal(format!(
            "backend listing '{path}' exceeded {MAX_LISTING_PAGES} pages"
        )))
    }

    async fn find_user_payload(&self, user_id: UserId) -> AppResult<Option<Value>> {
        match self.get_json::<Value>(format!("api/users/{user_id}").as_str()).await {
            Ok(payload) => Ok(Some(payload)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(path.as_str());
    }
    url
}

#[async_trait]
impl UserRepository for HttpBackendClient {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users: Vec<UserSummaryPayload> = self.get_all_pages("api/users").await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        self.find_user_payload(user_id)
            .await?
            .map(|payload| {
                serde_json::from_value::<User>(payload).map_err(|error| {
                    AppError::Internal(format!("invalid backend user '{user_id}': {error}"))
                })
            })
            .transpose()
    }

    async fn replace_role_assignments(
        &self,
        user_id: UserId,
        assignments: Vec<RoleAssignment>,
    ) -> AppResult<()> {
        let mut payload = self
            .find_user_payload(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        let assignments = serde_json::to_value(assignments).map_err(|error| {
            AppError::Internal(format!("failed to encode role assignments: {error}"))
        })?;
        let object = payload.as_object_mut().ok_or_else(|| {
            AppError::Internal(format!("backend user '{user_id}' is not a JSON object"))
        })?;
        object.insert("roleAssignments".to_owned(), assignments);

        let request = self.http_client.put(self.endpoint("api/users")?).json(&payload);
        self.send(request, "api/users").await?;
        Ok(())
    }
}

#[async_trait]
impl ReferenceDataRepository for HttpBackendClient {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let roles: Vec<RolePayload> = self.get_json("api/roles").await?;
        Ok(roles.into_iter().map(Role::from).collect())
    }

    async fn list_programs(&self) -> AppResult<Vec<Program>> {
        self.get_json("api/programs").await
    }

    async fn list_supervisory_nodes(&self) -> AppResult<Vec<SupervisoryNode>> {
        self.get_all_pages("api/supervisoryNodes").await
    }

    async fn list_supplying_facilities(&self) -> AppResult<Vec<Facility>> {
        self.get_all_pages("api/facilities/minimal?sort=name").await
    }
}
