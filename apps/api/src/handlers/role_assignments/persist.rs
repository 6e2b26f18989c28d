use super::*;

pub async fn save_role_assignments_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SaveRoleAssignmentsRequest>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(user_id.as_str())?;

    state
        .user_roles_service
        .save_role_assignments(user_id, into_assignments(payload.assignments))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn import_role_assignments_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ImportRoleAssignmentsRequest>,
) -> ApiResult<Json<ImportSummaryResponse>> {
    let user_id = parse_user_id(user_id.as_str())?;
    let source_user_id = parse_user_id(payload.source_user_id.as_str())?;

    let summary = state
        .user_roles_service
        .import_role_assignments(user_id, source_user_id)
        .await?;

    Ok(Json(ImportSummaryResponse::from(summary)))
}
