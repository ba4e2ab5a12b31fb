use actix_web::web::{Data, Json, Query};
use quill_api_common::{
  context::QuillContext,
  group::{GetGroup, GetGroupResponse},
};
use quill_db_schema::source::group::Group;
use quill_db_views::post_view::PostQuery;
use quill_utils::error::QuillResult;

#[tracing::instrument(skip(context))]
pub async fn get_group(
  data: Query<GetGroup>,
  context: Data<QuillContext>,
) -> QuillResult<Json<GetGroupResponse>> {
  let group = Group::read_from_slug(&mut context.pool(), &data.slug).await?;

  let paged = PostQuery {
    group_id: Some(group.id),
    page: data.page,
    limit: data.limit,
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(GetGroupResponse {
    group,
    posts: paged.items,
    page: paged.page,
    total_pages: paged.total_pages,
    has_next_page: paged.has_next_page,
    has_prev_page: paged.has_prev_page,
  }))
}
