use super::*;

pub async fn add_form_options_handler(
    State(state): State<AppState>,
    Query(query): Query<AddFormOptionsQuery>,
) -> ApiResult<Json<AddFormOptionsResponse>> {
    let selector = RightTypeSelector::parse(query.right_type.as_str());
    let options = state.user_roles_service.add_form_options(&selector).await?;

    debug!(
        right_type = %query.right_type,
        roles = options.roles.len(),
        "loaded add-role form options"
    );

    Ok(Json(AddFormOptionsResponse::from(options)))
}
