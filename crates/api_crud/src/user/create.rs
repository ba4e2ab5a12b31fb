use actix_web::web::{Data, Json};
use bcrypt::{hash, DEFAULT_COST};
use quill_api_common::{
  claims::Claims,
  context::QuillContext,
  person::{LoginResponse, Register},
};
use quill_db_schema::{
  source::{
    local_user::{LocalUser, LocalUserInsertForm},
    person::{Person, PersonInsertForm},
  },
  traits::Crud,
};
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  validation::{is_valid_actor_name, is_valid_password},
};

#[tracing::instrument(skip(context))]
pub async fn register(
  data: Json<Register>,
  context: Data<QuillContext>,
) -> QuillResult<Json<LoginResponse>> {
  is_valid_actor_name(&data.username)?;
  is_valid_password(&data.password)?;
  if *data.password != *data.password_verify {
    return Err(QuillErrorType::PasswordsDoNotMatch.into());
  }

  let person_form = PersonInsertForm {
    name: data.username.clone(),
    ..Default::default()
  };

  // The unique index on person.name catches duplicate registrations
  let inserted_person = Person::create(&mut context.pool(), &person_form)
    .await
    .with_quill_type(QuillErrorType::UsernameAlreadyExists)?;

  let password_encrypted = hash(&*data.password, DEFAULT_COST)?;

  let local_user_form = LocalUserInsertForm {
    person_id: inserted_person.id,
    password_encrypted,
    email: data.email.as_ref().map(|e| e.clone().into_inner()),
    admin: None,
  };

  let inserted_local_user = LocalUser::create(&mut context.pool(), &local_user_form)
    .await
    .with_quill_type(QuillErrorType::CouldntCreateUser)?;

  Ok(Json(LoginResponse {
    jwt: Some(Claims::jwt(inserted_local_user.id)?.into()),
  }))
}
