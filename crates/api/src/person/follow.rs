use actix_web::web::{Data, Json};
use quill_api_common::{
  context::QuillContext,
  person::{FollowPerson, FollowPersonResponse},
  utils::local_user_view_from_jwt,
};
use quill_db_schema::{
  source::{
    follow::{Follow, FollowForm},
    person::Person,
  },
  traits::{Crud, Followable},
};
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

#[tracing::instrument(skip(context))]
pub async fn follow_person(
  data: Json<FollowPerson>,
  context: Data<QuillContext>,
) -> QuillResult<Json<FollowPersonResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;

  if local_user_view.person.id == data.person_id {
    return Err(QuillErrorType::CantFollowYourself.into());
  }

  let person = Person::read(&mut context.pool(), data.person_id).await?;

  let form = FollowForm {
    follower_id: local_user_view.person.id,
    followed_id: person.id,
  };

  if data.follow {
    // Repeating a follow is harmless
    Follow::follow(&mut context.pool(), &form)
      .await
      .with_quill_type(QuillErrorType::CouldntCreateFollow)?;
  } else {
    let rows = Follow::unfollow(&mut context.pool(), &form).await?;
    if rows == 0 {
      return Err(QuillErrorType::NotFollowingPerson.into());
    }
  }

  Ok(Json(FollowPersonResponse {
    person,
    followed: data.follow,
  }))
}
