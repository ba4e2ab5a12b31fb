use crate::{
  newtypes::PersonId,
  schema::follow,
  source::follow::{Follow, FollowForm},
  traits::Followable,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{exists, insert_into},
  result::Error,
  select,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Followable for Follow {
  type Form = FollowForm;

  /// Following twice is a no-op, not an error. The original row survives, so
  /// the follow keeps its first timestamp.
  async fn follow(pool: &mut DbPool<'_>, form: &FollowForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(follow::table)
      .values(form)
      .on_conflict((follow::follower_id, follow::followed_id))
      .do_nothing()
      .execute(conn)
      .await?;
    follow::table
      .find((form.follower_id, form.followed_id))
      .first::<Self>(conn)
      .await
  }

  async fn unfollow(pool: &mut DbPool<'_>, form: &FollowForm) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(follow::table.find((form.follower_id, form.followed_id)))
      .execute(conn)
      .await
  }
}

impl Follow {
  pub async fn exists(
    pool: &mut DbPool<'_>,
    follower_id: PersonId,
    followed_id: PersonId,
  ) -> Result<bool, Error> {
    let conn = &mut get_conn(pool).await?;
    select(exists(
      follow::table.find((follower_id, followed_id)),
    ))
    .get_result::<bool>(conn)
    .await
  }

  pub async fn follower_count(pool: &mut DbPool<'_>, person_id: PersonId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    follow::table
      .filter(follow::followed_id.eq(person_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
  use crate::{
    source::{
      follow::{Follow, FollowForm},
      person::{Person, PersonInsertForm},
    },
    traits::{Crud, Followable},
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_follow_is_idempotent() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let follower = Person::create(
      pool,
      &PersonInsertForm {
        name: "follow_tester".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let followed = Person::create(
      pool,
      &PersonInsertForm {
        name: "famous_author".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let form = FollowForm {
      follower_id: follower.id,
      followed_id: followed.id,
    };

    let first = Follow::follow(pool, &form).await.unwrap();
    let second = Follow::follow(pool, &form).await.unwrap();
    assert_eq!(first.follower_id, second.follower_id);
    assert_eq!(first.followed_id, second.followed_id);
    assert_eq!(1, Follow::follower_count(pool, followed.id).await.unwrap());
    assert!(Follow::exists(pool, follower.id, followed.id).await.unwrap());

    let unfollowed = Follow::unfollow(pool, &form).await.unwrap();
    assert_eq!(1, unfollowed);

    // A second unfollow touches nothing
    let unfollowed_again = Follow::unfollow(pool, &form).await.unwrap();
    assert_eq!(0, unfollowed_again);

    Person::delete(pool, follower.id).await.unwrap();
    Person::delete(pool, followed.id).await.unwrap();
  }
}
