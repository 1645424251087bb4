//! Member handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use chatdev_shared::ErrorResponse;
use chatdev_shared::dto::{CreateMemberRequest, MemberResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "members",
    responses((status = 200, description = "All members", body = [MemberResponse]))
)]
pub async fn list_members(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let members: Vec<MemberResponse> = state
        .members
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(members))
}

/// POST /api/members
#[utoipa::path(
    post,
    path = "/api/members",
    tag = "members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Created", body = MemberResponse),
        (status = 422, description = "Validation Failed", body = ErrorResponse)
    )
)]
pub async fn create_member(
    state: web::Data<AppState>,
    body: web::Json<CreateMemberRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let member = state.members.insert(req.into()).await?;
    Ok(HttpResponse::Created().json(MemberResponse::from(member)))
}

/// DELETE /api/members
#[utoipa::path(
    delete,
    path = "/api/members",
    tag = "members",
    responses((status = 200, description = "How many members were deleted", body = String))
)]
pub async fn delete_all_members(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.members.delete_all().await?;
    Ok(HttpResponse::Ok().json(format!("Successfully deleted {} members", count)))
}
