use super::*;

pub async fn role_assignment_page_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<RoleAssignmentPageQuery>,
) -> ApiResult<Json<RoleAssignmentPageResponse>> {
    let user_id = parse_user_id(user_id.as_str())?;
    let selector = RightTypeSelector::parse(query.right_type.as_str());

    let page = state
        .user_roles_service
        .role_assignment_page(
            user_id,
            &selector,
            RoleAssignmentQuery {
                search: query.search,
                page_index: query.page.unwrap_or_default(),
                page_size: query.page_size.unwrap_or(DEFAULT_ASSIGNMENT_PAGE_SIZE),
            },
        )
        .await?;

    Ok(Json(RoleAssignmentPageResponse::from(page)))
}
