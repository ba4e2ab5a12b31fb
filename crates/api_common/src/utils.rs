use crate::{claims::Claims, context::QuillContext, sensitive::Sensitive};
use quill_db_schema::newtypes::LocalUserId;
use quill_db_views::structs::LocalUserView;
use quill_utils::error::{QuillError, QuillErrorExt, QuillErrorType, QuillResult};

#[tracing::instrument(skip_all)]
pub async fn local_user_view_from_jwt(
  jwt: &str,
  context: &QuillContext,
) -> QuillResult<LocalUserView> {
  let claims = Claims::decode(jwt).map_err(|_| QuillError::from(QuillErrorType::NotLoggedIn))?;
  let local_user_id = LocalUserId(claims.sub);
  let local_user_view = LocalUserView::read(&mut context.pool(), local_user_id)
    .await
    .with_quill_type(QuillErrorType::NotLoggedIn)?;
  Ok(local_user_view)
}

#[tracing::instrument(skip_all)]
pub async fn local_user_view_from_jwt_opt(
  jwt: Option<&Sensitive<String>>,
  context: &QuillContext,
) -> Option<LocalUserView> {
  local_user_view_from_jwt(jwt?.as_ref(), context).await.ok()
}

/// Checks that the logged-in user is an admin.
pub fn is_admin(local_user_view: &LocalUserView) -> QuillResult<()> {
  if !local_user_view.local_user.admin {
    Err(QuillErrorType::NotAnAdmin.into())
  } else {
    Ok(())
  }
}
