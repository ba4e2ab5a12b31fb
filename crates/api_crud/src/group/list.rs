use actix_web::web::{Data, Json};
use quill_api_common::{context::QuillContext, group::GetGroupsResponse};
use quill_db_schema::source::group::Group;
use quill_utils::error::QuillResult;

#[tracing::instrument(skip(context))]
pub async fn list_groups(context: Data<QuillContext>) -> QuillResult<Json<GetGroupsResponse>> {
  let groups = Group::list(&mut context.pool()).await?;
  Ok(Json(GetGroupsResponse { groups }))
}
