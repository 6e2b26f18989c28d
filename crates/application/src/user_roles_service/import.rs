use lmis_domain::import_role_assignments;

use super::*;
use crate::user_roles_ports::ImportSummary;

impl UserRolesService {
    /// Copies the assignments of `source_id` onto `target_id`.
    ///
    /// Incoming assignments that duplicate one the target already holds are
    /// skipped silently. The merged list replaces the target's list.
    pub async fn import_role_assignments(
        &self,
        target_id: UserId,
        source_id: UserId,
    ) -> AppResult<ImportSummary> {
        if target_id == source_id {
            return Err(AppError::Validation(
                "cannot import role assignments from the same user".to_owned(),
            ));
        }

        let target = self.user(target_id).await?;
        let source = self.user(source_id).await?;

        let existing = target.role_assignments;
        let incoming = source.role_assignments;
        let merged = import_role_assignments(&existing, &incoming);
        let imported = merged.len() - existing.len();
        let skipped = incoming.len() - imported;

        self.user_repository
            .replace_role_assignments(
                target_id,
                merged
                    .iter()
                    .map(RoleAssignment::without_display_fields)
                    .collect(),
            )
            .await?;

        info!(
            target_id = %target_id,
            source_id = %source_id,
            imported,
            skipped,
            "imported role assignments"
        );

        Ok(ImportSummary {
            assignments: merged,
            imported,
            skipped,
        })
    }
}
