use actix_web::web::{Data, Json};
use quill_api_common::{
  context::QuillContext,
  group::{CreateGroup, GroupResponse},
  utils::{is_admin, local_user_view_from_jwt},
};
use quill_db_schema::{
  source::group::{Group, GroupInsertForm},
  traits::Crud,
};
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  validation::{is_valid_group_slug, is_valid_group_title},
};

#[tracing::instrument(skip(context))]
pub async fn create_group(
  data: Json<CreateGroup>,
  context: Data<QuillContext>,
) -> QuillResult<Json<GroupResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;
  is_admin(&local_user_view)?;

  is_valid_group_title(&data.title)?;
  is_valid_group_slug(&data.slug)?;

  let group_form = GroupInsertForm {
    title: data.title.clone(),
    slug: data.slug.clone(),
    description: data.description.clone(),
  };

  let inserted_group = Group::create(&mut context.pool(), &group_form)
    .await
    .with_quill_type(QuillErrorType::GroupSlugAlreadyExists)?;

  Ok(Json(GroupResponse {
    group: inserted_group,
  }))
}
