use actix_web::web::{Data, Json};
use quill_api_common::{
  context::QuillContext,
  post::{EditPost, PostResponse},
  utils::local_user_view_from_jwt,
};
use quill_db_schema::{
  source::{
    group::Group,
    post::{Post, PostUpdateForm},
  },
  traits::Crud,
  utils::{diesel_url_update, now},
};
use quill_db_views::structs::PostView;
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  validation::is_valid_body_field,
};

#[tracing::instrument(skip(context))]
pub async fn update_post(
  data: Json<EditPost>,
  context: Data<QuillContext>,
) -> QuillResult<Json<PostResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;

  let orig_post = Post::read(&mut context.pool(), data.post_id).await?;

  // Only the author can touch a post
  if orig_post.creator_id != local_user_view.person.id {
    return Err(QuillErrorType::NoPostEditAllowed.into());
  }

  if let Some(body) = &data.body {
    is_valid_body_field(body, true)?;
  }

  if let Some(group_id) = data.group_id {
    Group::read(&mut context.pool(), group_id).await?;
  }

  let image_url = diesel_url_update(data.image_url.as_deref())?;

  let post_form = PostUpdateForm {
    body: data.body.clone(),
    group_id: data.group_id.map(Some),
    image_url,
    updated: Some(Some(now())),
  };

  let updated_post = Post::update(&mut context.pool(), data.post_id, &post_form)
    .await
    .with_quill_type(QuillErrorType::CouldntUpdatePost)?;

  let post_view = PostView::read(&mut context.pool(), updated_post.id).await?;
  Ok(Json(PostResponse { post_view }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
  use super::update_post;
  use actix_web::web::{Data, Json};
  use pretty_assertions::assert_eq;
  use quill_api_common::{claims::Claims, context::QuillContext, post::EditPost};
  use quill_db_schema::{
    source::{
      local_user::{LocalUser, LocalUserInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use quill_utils::error::QuillErrorType;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_only_the_author_can_edit() {
    let actual_pool = build_db_pool_for_tests().await;
    let pool = &mut (&actual_pool).into();

    let author = Person::create(
      pool,
      &PersonInsertForm {
        name: "edit_author".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let intruder = Person::create(
      pool,
      &PersonInsertForm {
        name: "edit_intruder".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let intruder_local_user = LocalUser::create(
      pool,
      &LocalUserInsertForm {
        person_id: intruder.id,
        password_encrypted: "not a real hash".into(),
        email: None,
        admin: None,
      },
    )
    .await
    .unwrap();

    let post = Post::create(
      pool,
      &PostInsertForm {
        body: "the original body".into(),
        creator_id: author.id,
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let context = Data::new(QuillContext::create(actual_pool.clone()));
    let auth = Claims::jwt(intruder_local_user.id).unwrap();
    let res = update_post(
      Json(EditPost {
        post_id: post.id,
        body: Some("overwritten by someone else".into()),
        group_id: None,
        image_url: None,
        auth: auth.into(),
      }),
      context,
    )
    .await;

    assert_eq!(
      QuillErrorType::NoPostEditAllowed,
      res.err().unwrap().error_type
    );

    // Nothing got persisted
    let unchanged = Post::read(pool, post.id).await.unwrap();
    assert_eq!(post, unchanged);
    assert_eq!(None, unchanged.updated);

    Person::delete(pool, author.id).await.unwrap();
    Person::delete(pool, intruder.id).await.unwrap();
  }
}
