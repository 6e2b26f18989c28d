use lmis_domain::{RightTypeSelector, roles_for_right_type};

use super::*;
use crate::user_roles_ports::AddFormOptions;

impl UserRolesService {
    /// Loads the pickers of the add-role form for a tab.
    ///
    /// Only the catalogs named by the tab's scope requirements are fetched.
    /// An unrecognized tab offers nothing.
    pub async fn add_form_options(
        &self,
        selector: &RightTypeSelector,
    ) -> AppResult<AddFormOptions> {
        let Some(right_type) = selector.right_type() else {
            return Ok(AddFormOptions::default());
        };

        let scope = right_type.scope_requirements();
        let roles = self.reference_data_repository.list_roles().await?;

        let programs = if scope.program {
            self.reference_data_repository.list_programs().await?
        } else {
            Vec::new()
        };
        let supervisory_nodes = if scope.supervisory_node {
            self.reference_data_repository
                .list_supervisory_nodes()
                .await?
        } else {
            Vec::new()
        };
        let warehouses = if scope.warehouse {
            self.reference_data_repository
                .list_supplying_facilities()
                .await?
        } else {
            Vec::new()
        };

        Ok(AddFormOptions {
            roles: roles_for_right_type(&roles, right_type),
            programs,
            supervisory_nodes,
            warehouses,
        })
    }
}
