use actix_web::web::{Data, Json};
use quill_api_common::{
  context::QuillContext,
  post::{CreatePost, PostResponse},
  utils::local_user_view_from_jwt,
};
use quill_db_schema::{
  source::{group::Group, post::{Post, PostInsertForm}},
  traits::Crud,
  utils::diesel_url_create,
};
use quill_db_views::structs::PostView;
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  validation::is_valid_body_field,
};

#[tracing::instrument(skip(context))]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<QuillContext>,
) -> QuillResult<Json<PostResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;

  is_valid_body_field(&data.body, true)?;

  // A bad group id fails the whole request, instead of silently losing the
  // association
  if let Some(group_id) = data.group_id {
    Group::read(&mut context.pool(), group_id).await?;
  }

  let image_url = diesel_url_create(data.image_url.as_ref().map(|u| u.as_str()))?;

  let post_form = PostInsertForm {
    body: data.body.clone(),
    creator_id: local_user_view.person.id,
    group_id: data.group_id,
    image_url,
  };

  let inserted_post = Post::create(&mut context.pool(), &post_form)
    .await
    .with_quill_type(QuillErrorType::CouldntCreatePost)?;

  let post_view = PostView::read(&mut context.pool(), inserted_post.id).await?;
  Ok(Json(PostResponse { post_view }))
}
