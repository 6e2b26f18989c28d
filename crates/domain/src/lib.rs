//! Domain entities and invariants for user role administration.

#![forbid(unsafe_code)]

mod reconciler;
mod reference_data;
mod right_type;
mod role;
mod role_assignment;
mod user;

pub use reconciler::{
    ReconcileError, RemovalOutcome, add_role_assignment, import_role_assignments,
    is_duplicate_by_shape, is_duplicate_for_right_type, matches_for_removal,
    remove_role_assignment,
};
pub use reference_data::{Facility, Program, ReferenceData, SupervisoryNode};
pub use right_type::{RightType, RightTypeSelector, ScopeRequirements};
pub use role::{Right, Role, roles_for_right_type};
pub use role_assignment::{AssignmentShape, RoleAssignment, RoleAssignmentDraft};
pub use user::{User, UserId};
