use actix_web::web::{Data, Json};
use bcrypt::verify;
use quill_api_common::{
  claims::Claims,
  context::QuillContext,
  person::{Login, LoginResponse},
};
use quill_db_views::structs::LocalUserView;
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

#[tracing::instrument(skip(context))]
pub async fn login(
  data: Json<Login>,
  context: Data<QuillContext>,
) -> QuillResult<Json<LoginResponse>> {
  // An unknown name gets the same response as a wrong password
  let local_user_view = LocalUserView::find_by_name(&mut context.pool(), &data.username_or_email)
    .await
    .with_quill_type(QuillErrorType::IncorrectLogin)?;

  let valid = verify(
    &*data.password,
    &local_user_view.local_user.password_encrypted,
  )
  .unwrap_or(false);
  if !valid {
    return Err(QuillErrorType::IncorrectLogin.into());
  }

  Ok(Json(LoginResponse {
    jwt: Some(Claims::jwt(local_user_view.local_user.id)?.into()),
  }))
}
