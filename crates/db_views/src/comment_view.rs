use crate::structs::CommentView;
use diesel::{result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use quill_db_schema::{
  newtypes::{CommentId, PostId},
  schema::{comment, person},
  source::{comment::Comment, person::Person},
  traits::JoinView,
  utils::{get_conn, DbPool},
};

type CommentViewTuple = (Comment, Person);

impl CommentView {
  pub async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = comment::table
      .find(comment_id)
      .inner_join(person::table)
      .select((comment::all_columns, person::all_columns))
      .first::<CommentViewTuple>(conn)
      .await?;
    Ok(Self::from_tuple(res))
  }

  /// All comments on a post, oldest first.
  pub async fn for_post(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = comment::table
      .filter(comment::post_id.eq(post_id))
      .inner_join(person::table)
      .select((comment::all_columns, person::all_columns))
      .order_by(comment::published.asc())
      .load::<CommentViewTuple>(conn)
      .await?;
    Ok(res.into_iter().map(Self::from_tuple).collect())
  }
}

impl JoinView for CommentView {
  type JoinTuple = CommentViewTuple;
  fn from_tuple(a: Self::JoinTuple) -> Self {
    Self {
      comment: a.0,
      creator: a.1,
    }
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
  use crate::comment_view::CommentView;
  use pretty_assertions::assert_eq;
  use quill_db_schema::{
    source::{
      comment::{Comment, CommentInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_comments_for_post() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let commenter = Person::create(
      pool,
      &PersonInsertForm {
        name: "comment_tester".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let post = Post::create(
      pool,
      &PostInsertForm {
        body: "a commentable post".into(),
        creator_id: commenter.id,
        ..Default::default()
      },
    )
    .await
    .unwrap();

    for body in ["first", "second"] {
      Comment::create(
        pool,
        &CommentInsertForm {
          body: body.into(),
          creator_id: commenter.id,
          post_id: post.id,
        },
      )
      .await
      .unwrap();
    }

    let comments = CommentView::for_post(pool, post.id).await.unwrap();
    assert_eq!(2, comments.len());
    assert_eq!("first", comments[0].comment.body);
    assert_eq!(commenter.id, comments[0].creator.id);

    let read = CommentView::read(pool, comments[1].comment.id).await.unwrap();
    assert_eq!(comments[1], read);

    // Cascade cleans up posts and comments
    Person::delete(pool, commenter.id).await.unwrap();
    assert!(CommentView::read(pool, comments[0].comment.id)
      .await
      .is_err());
  }
}
