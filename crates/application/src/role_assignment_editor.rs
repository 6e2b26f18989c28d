use lmis_domain::{
    ReconcileError, RemovalOutcome, RightTypeSelector, RoleAssignment, add_role_assignment,
    remove_role_assignment,
};
use tracing::{debug, warn};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Operation applied.
    Success,
    /// Operation rejected; the list is unchanged.
    Error,
    /// Nothing to do; the list is unchanged.
    Info,
}

/// Outcome message for one editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Translation key of the message.
    pub message_key: &'static str,
}

impl Notification {
    const fn new(level: NotificationLevel, message_key: &'static str) -> Self {
        Self { level, message_key }
    }
}

/// Working copy of one user's assignments while an administrator edits them.
///
/// Rejected operations never touch the list. Saving is left to the caller,
/// which takes the list back with [`RoleAssignmentEditor::into_assignments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentEditor {
    initial: Vec<RoleAssignment>,
    assignments: Vec<RoleAssignment>,
}

impl RoleAssignmentEditor {
    /// Starts editing from the user's current assignments.
    #[must_use]
    pub fn new(assignments: Vec<RoleAssignment>) -> Self {
        Self {
            initial: assignments.clone(),
            assignments,
        }
    }

    /// Returns the working list.
    #[must_use]
    pub fn assignments(&self) -> &[RoleAssignment] {
        self.assignments.as_slice()
    }

    /// Returns whether the working list differs from the starting snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.initial != self.assignments
    }

    /// Adds a candidate on the active tab.
    pub fn add(
        &mut self,
        candidate: RoleAssignment,
        selector: &RightTypeSelector,
    ) -> Notification {
        match add_role_assignment(&self.assignments, candidate, selector) {
            Ok(next) => {
                self.assignments = next;
                Notification::new(NotificationLevel::Success, "roleAdded")
            }
            Err(ReconcileError::DuplicateAssignment { role_id }) => {
                warn!(role_id = role_id.as_str(), "attempted to add a duplicate role assignment");
                Notification::new(NotificationLevel::Error, "roleAlreadyAssigned")
            }
            Err(ReconcileError::InvalidAssignment(reason)) => {
                warn!(reason = reason.as_str(), "attempted to add an invalid role assignment");
                Notification::new(NotificationLevel::Error, "cannotAddEmptyRole")
            }
            // Adding on an unrecognized tab compares by role id instead, so only
            // removal raises this today.
            Err(ReconcileError::UnrecognizedRightType(_)) => {
                Notification::new(NotificationLevel::Error, "unknownRightType")
            }
        }
    }

    /// Removes the target assignment on the active tab.
    pub fn remove(&mut self, target: &RoleAssignment, selector: &RightTypeSelector) -> Notification {
        match remove_role_assignment(&self.assignments, target, selector) {
            Ok(RemovalOutcome::Removed {
                assignments,
                removed,
            }) => {
                debug!(
                    role_id = target.role_id.as_str(),
                    removed, "removed role assignment"
                );
                self.assignments = assignments;
                Notification::new(NotificationLevel::Success, "roleRemovedSuccess")
            }
            Ok(RemovalOutcome::NotFound) => {
                Notification::new(NotificationLevel::Info, "roleNotFoundToRemove")
            }
            Err(_) => Notification::new(NotificationLevel::Error, "unknownRightType"),
        }
    }

    /// Hands the working list back for saving.
    #[must_use]
    pub fn into_assignments(self) -> Vec<RoleAssignment> {
        self.assignments
    }
}
