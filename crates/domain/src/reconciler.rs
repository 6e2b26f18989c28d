//! Identity rules for role assignments and the list operations built on them.
//!
//! Two assignments with the same identity cannot coexist in one user's list.
//! Identity depends on the right type: supervision assignments are keyed by
//! role, program and supervisory node, order fulfillment assignments by role
//! and warehouse, and everything else by role alone.
//!
//! Add and remove use the right type of the active tab. Import infers the
//! right type from the scope fields of each incoming assignment because the
//! source list spans every tab and carries no right type of its own. The two
//! rules disagree for candidates whose scope does not match their tab.
//!
//! Every operation takes a snapshot and returns the next one. Inputs are
//! never mutated.

use lmis_core::AppError;
use thiserror::Error;
use tracing::{error, warn};

use crate::{AssignmentShape, RightType, RightTypeSelector, RoleAssignment};

/// Failures raised by role assignment reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// Candidate collides with an assignment already in the list.
    #[error("role '{role_id}' is already assigned with the same scope")]
    DuplicateAssignment {
        /// Role of the colliding candidate.
        role_id: String,
    },

    /// Candidate is structurally incomplete.
    #[error("invalid role assignment: {0}")]
    InvalidAssignment(String),

    /// Operation requested for a right type outside the known set.
    #[error("unrecognized right type '{0}'")]
    UnrecognizedRightType(String),
}

impl From<ReconcileError> for AppError {
    fn from(value: ReconcileError) -> Self {
        match value {
            ReconcileError::DuplicateAssignment { .. } => Self::Conflict(value.to_string()),
            ReconcileError::InvalidAssignment(_) => Self::Validation(value.to_string()),
            ReconcileError::UnrecognizedRightType(_) => Self::Internal(value.to_string()),
        }
    }
}

/// Result of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// At least one entry matched and was dropped.
    Removed {
        /// Next list snapshot.
        assignments: Vec<RoleAssignment>,
        /// Number of dropped entries.
        removed: usize,
    },
    /// Nothing matched; the list is unchanged.
    NotFound,
}

fn normalized(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn same_scope_for(
    existing: &RoleAssignment,
    candidate: &RoleAssignment,
    right_type: RightType,
) -> bool {
    match right_type {
        RightType::Supervision => {
            normalized(&existing.program_id) == normalized(&candidate.program_id)
                && normalized(&existing.supervisory_node_id)
                    == normalized(&candidate.supervisory_node_id)
        }
        RightType::OrderFulfillment => {
            normalized(&existing.warehouse_id) == normalized(&candidate.warehouse_id)
        }
        RightType::Reports | RightType::GeneralAdmin => true,
    }
}

/// Category-driven identity used when adding on a known tab.
///
/// Absent scope values compare equal to empty strings.
#[must_use]
pub fn is_duplicate_for_right_type(
    existing: &RoleAssignment,
    candidate: &RoleAssignment,
    right_type: RightType,
) -> bool {
    existing.role_id == candidate.role_id && same_scope_for(existing, candidate, right_type)
}

/// Category-driven identity used when removing on a known tab.
///
/// Scope values compare exactly; `None` and `Some("")` differ.
#[must_use]
pub fn matches_for_removal(
    existing: &RoleAssignment,
    target: &RoleAssignment,
    right_type: RightType,
) -> bool {
    if existing.role_id != target.role_id {
        return false;
    }

    match right_type {
        RightType::Supervision => {
            existing.program_id == target.program_id
                && existing.supervisory_node_id == target.supervisory_node_id
        }
        RightType::OrderFulfillment => existing.warehouse_id == target.warehouse_id,
        RightType::Reports | RightType::GeneralAdmin => true,
    }
}

/// Shape-inferred identity used when importing.
///
/// The scope fields of `incoming` decide which fields are compared.
#[must_use]
pub fn is_duplicate_by_shape(existing: &RoleAssignment, incoming: &RoleAssignment) -> bool {
    if existing.role_id != incoming.role_id {
        return false;
    }

    match incoming.shape() {
        AssignmentShape::Supervision => same_scope_for(existing, incoming, RightType::Supervision),
        AssignmentShape::OrderFulfillment => {
            same_scope_for(existing, incoming, RightType::OrderFulfillment)
        }
        AssignmentShape::RoleOnly => true,
    }
}

/// Appends `candidate` unless it duplicates an entry under the tab's rule.
///
/// An unrecognized tab falls back to role equality.
pub fn add_role_assignment(
    current: &[RoleAssignment],
    candidate: RoleAssignment,
    selector: &RightTypeSelector,
) -> Result<Vec<RoleAssignment>, ReconcileError> {
    let is_duplicate = match selector {
        RightTypeSelector::Known(right_type) => current
            .iter()
            .any(|existing| is_duplicate_for_right_type(existing, &candidate, *right_type)),
        RightTypeSelector::Unrecognized(value) => {
            warn!(
                right_type = value.as_str(),
                "duplicate check fell back to role equality for unrecognized right type"
            );
            current
                .iter()
                .any(|existing| existing.role_id == candidate.role_id)
        }
    };

    if is_duplicate {
        return Err(ReconcileError::DuplicateAssignment {
            role_id: candidate.role_id,
        });
    }

    if candidate.role_id.trim().is_empty() {
        return Err(ReconcileError::InvalidAssignment(
            "role id must not be empty".to_owned(),
        ));
    }

    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(candidate);
    Ok(next)
}

/// Drops every entry that is the same assignment as `target` on the tab.
///
/// An unrecognized tab removes nothing and fails.
pub fn remove_role_assignment(
    current: &[RoleAssignment],
    target: &RoleAssignment,
    selector: &RightTypeSelector,
) -> Result<RemovalOutcome, ReconcileError> {
    let right_type = match selector {
        RightTypeSelector::Known(right_type) => *right_type,
        RightTypeSelector::Unrecognized(value) => {
            error!(
                right_type = value.as_str(),
                role_id = target.role_id.as_str(),
                "refusing to remove role assignment for unrecognized right type"
            );
            return Err(ReconcileError::UnrecognizedRightType(value.clone()));
        }
    };

    let assignments: Vec<RoleAssignment> = current
        .iter()
        .filter(|existing| !matches_for_removal(existing, target, right_type))
        .cloned()
        .collect();

    let removed = current.len() - assignments.len();
    if removed == 0 {
        return Ok(RemovalOutcome::NotFound);
    }

    Ok(RemovalOutcome::Removed {
        assignments,
        removed,
    })
}

/// Merges `incoming` into `existing`, skipping shape-identity duplicates.
///
/// Incoming entries are checked against `existing` only, so duplicates
/// within `incoming` itself are all kept.
#[must_use]
pub fn import_role_assignments(
    existing: &[RoleAssignment],
    incoming: &[RoleAssignment],
) -> Vec<RoleAssignment> {
    let additions = incoming.iter().filter(|candidate| {
        !existing
            .iter()
            .any(|present| is_duplicate_by_shape(present, candidate))
    });

    existing.iter().chain(additions).cloned().collect()
}
