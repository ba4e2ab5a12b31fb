use actix_web::web::{Data, Json};
use quill_api_common::{
  comment::{CommentResponse, CreateComment},
  context::QuillContext,
  utils::local_user_view_from_jwt,
};
use quill_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
};
use quill_db_views::structs::CommentView;
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  validation::is_valid_body_field,
};

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<QuillContext>,
) -> QuillResult<Json<CommentResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;

  is_valid_body_field(&data.body, false)?;

  // 404 for comments on a post that isn't there
  let post = Post::read(&mut context.pool(), data.post_id).await?;

  let comment_form = CommentInsertForm {
    body: data.body.clone(),
    creator_id: local_user_view.person.id,
    post_id: post.id,
  };

  let inserted_comment = Comment::create(&mut context.pool(), &comment_form)
    .await
    .with_quill_type(QuillErrorType::CouldntCreateComment)?;

  let comment_view = CommentView::read(&mut context.pool(), inserted_comment.id).await?;
  Ok(Json(CommentResponse { comment_view }))
}
