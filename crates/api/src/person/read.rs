use actix_web::web::{Data, Json, Query};
use quill_api_common::{
  context::QuillContext,
  person::{GetPersonDetails, GetPersonDetailsResponse},
  utils::local_user_view_from_jwt_opt,
};
use quill_db_schema::{
  source::{follow::Follow, person::Person},
  traits::Crud,
};
use quill_db_views::post_view::PostQuery;
use quill_utils::error::{QuillErrorType, QuillResult};

#[tracing::instrument(skip(context))]
pub async fn get_person_details(
  data: Query<GetPersonDetails>,
  context: Data<QuillContext>,
) -> QuillResult<Json<GetPersonDetailsResponse>> {
  let local_user_view = local_user_view_from_jwt_opt(data.auth.as_ref(), &context).await;

  let person = match (data.person_id, &data.username) {
    (Some(person_id), _) => Person::read(&mut context.pool(), person_id).await?,
    (None, Some(username)) => Person::read_from_name(&mut context.pool(), username).await?,
    (None, None) => return Err(QuillErrorType::NotFound.into()),
  };

  let paged = PostQuery {
    creator_id: Some(person.id),
    page: data.page,
    limit: data.limit,
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  let follower_count = Follow::follower_count(&mut context.pool(), person.id).await?;

  let follows = match &local_user_view {
    Some(me) if me.person.id != person.id => {
      Follow::exists(&mut context.pool(), me.person.id, person.id).await?
    }
    _ => false,
  };

  Ok(Json(GetPersonDetailsResponse {
    person,
    posts: paged.items,
    page: paged.page,
    total_pages: paged.total_pages,
    has_next_page: paged.has_next_page,
    has_prev_page: paged.has_prev_page,
    post_count: paged.total_items,
    follower_count,
    follows,
  }))
}
