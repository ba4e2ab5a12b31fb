use actix_web::web::{Data, Json, Query};
use quill_api_common::{
  context::QuillContext,
  post::{GetPost, GetPostResponse},
};
use quill_db_views::structs::{CommentView, PostView};
use quill_utils::error::QuillResult;

#[tracing::instrument(skip(context))]
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<QuillContext>,
) -> QuillResult<Json<GetPostResponse>> {
  let post_view = PostView::read(&mut context.pool(), data.id).await?;
  let comments = CommentView::for_post(&mut context.pool(), data.id).await?;

  Ok(Json(GetPostResponse {
    post_view,
    comments,
  }))
}
