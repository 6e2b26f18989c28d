use super::*;

pub async fn add_role_assignment_handler(
    Json(payload): Json<AddRoleAssignmentRequest>,
) -> ApiResult<Json<RoleAssignmentEditResponse>> {
    let selector = RightTypeSelector::parse(payload.right_type.as_str());
    let candidate = RoleAssignmentDraft::from(payload.draft).into_candidate(&selector)?;

    let mut editor = RoleAssignmentEditor::new(into_assignments(payload.current));
    let notification = editor.add(candidate, &selector);
    debug!(
        right_type = selector.as_str(),
        message_key = notification.message_key,
        "applied role assignment add"
    );

    Ok(Json(RoleAssignmentEditResponse {
        assignments: into_dtos(editor.into_assignments()),
        notification: notification.into(),
    }))
}

pub async fn remove_role_assignment_handler(
    Json(payload): Json<RemoveRoleAssignmentRequest>,
) -> ApiResult<Json<RoleAssignmentEditResponse>> {
    let selector = RightTypeSelector::parse(payload.right_type.as_str());
    let target = RoleAssignment::from(payload.target);

    let mut editor = RoleAssignmentEditor::new(into_assignments(payload.current));
    let notification = editor.remove(&target, &selector);
    debug!(
        right_type = selector.as_str(),
        message_key = notification.message_key,
        "applied role assignment removal"
    );

    Ok(Json(RoleAssignmentEditResponse {
        assignments: into_dtos(editor.into_assignments()),
        notification: notification.into(),
    }))
}
