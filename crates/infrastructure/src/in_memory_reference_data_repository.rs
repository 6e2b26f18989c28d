use async_trait::async_trait;
use lmis_application::ReferenceDataRepository;
use lmis_core::AppResult;
use lmis_domain::{Facility, Program, Role, SupervisoryNode};
use tokio::sync::RwLock;

/// In-memory reference data catalogs.
#[derive(Debug, Default)]
pub struct InMemoryReferenceDataRepository {
    roles: RwLock<Vec<Role>>,
    programs: RwLock<Vec<Program>>,
    supervisory_nodes: RwLock<Vec<SupervisoryNode>>,
    facilities: RwLock<Vec<Facility>>,
}

impl InMemoryReferenceDataRepository {
    /// Creates empty catalogs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the role catalog.
    #[must_use]
    pub fn with_roles(self, roles: Vec<Role>) -> Self {
        Self {
            roles: RwLock::new(roles),
            ..self
        }
    }

    /// Seeds the program catalog.
    #[must_use]
    pub fn with_programs(self, programs: Vec<Program>) -> Self {
        Self {
            programs: RwLock::new(programs),
            ..self
        }
    }

    /// Seeds the supervisory node catalog.
    #[must_use]
    pub fn with_supervisory_nodes(self, supervisory_nodes: Vec<SupervisoryNode>) -> Self {
        Self {
            supervisory_nodes: RwLock::new(supervisory_nodes),
            ..self
        }
    }

    /// Seeds the supplying facility catalog.
    #[must_use]
    pub fn with_facilities(self, facilities: Vec<Facility>) -> Self {
        Self {
            facilities: RwLock::new(facilities),
            ..self
        }
    }
}

#[async_trait]
impl ReferenceDataRepository for InMemoryReferenceDataRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.read().await.clone())
    }

    async fn list_programs(&self) -> AppResult<Vec<Program>> {
        Ok(self.programs.read().await.clone())
    }

    async fn list_supervisory_nodes(&self) -> AppResult<Vec<SupervisoryNode>> {
        Ok(self.supervisory_nodes.read().await.clone())
    }

    async fn list_supplying_facilities(&self) -> AppResult<Vec<Facility>> {
        let mut facilities = self.facilities.read().await.clone();
        facilities.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(facilities)
    }
}
