use crate::{
  pagination::page_window,
  structs::{Paged, PostView},
};
use diesel::{result::Error, ExpressionMethods, NullableExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use quill_db_schema::{
  newtypes::{GroupId, PersonId, PostId},
  schema::{follow, groups, person, post},
  source::{group::Group, person::Person, post::Post},
  traits::JoinView,
  utils::{get_conn, DbPool},
  ListingType,
};

type PostViewTuple = (Post, Person, Option<Group>);

impl PostView {
  pub async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = post::table
      .find(post_id)
      .inner_join(person::table)
      .left_join(groups::table)
      .select((
        post::all_columns,
        person::all_columns,
        groups::all_columns.nullable(),
      ))
      .first::<PostViewTuple>(conn)
      .await?;
    Ok(Self::from_tuple(res))
  }
}

#[derive(Default, Clone)]
pub struct PostQuery {
  pub listing_type: Option<ListingType>,
  pub group_id: Option<GroupId>,
  pub creator_id: Option<PersonId>,
  /// Needed for [`ListingType::Subscribed`].
  pub my_person_id: Option<PersonId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl PostQuery {
  /// Serves one page of the listing, newest first. The requested page is
  /// clamped into range, so this never fails on a bad page number.
  pub async fn list(self, pool: &mut DbPool<'_>) -> Result<Paged<PostView>, Error> {
    let conn = &mut get_conn(pool).await?;

    // The count runs on the same filters as the load. The joins are all
    // row-preserving, so they can be left off the count.
    let mut count_query = post::table.into_boxed();
    let mut query = post::table
      .inner_join(person::table)
      .left_join(groups::table)
      .select((
        post::all_columns,
        person::all_columns,
        groups::all_columns.nullable(),
      ))
      .into_boxed();

    if let Some(group_id) = self.group_id {
      count_query = count_query.filter(post::group_id.eq(group_id));
      query = query.filter(post::group_id.eq(group_id));
    }

    if let Some(creator_id) = self.creator_id {
      count_query = count_query.filter(post::creator_id.eq(creator_id));
      query = query.filter(post::creator_id.eq(creator_id));
    }

    if self.listing_type.unwrap_or_default() == ListingType::Subscribed {
      let my_person_id = self
        .my_person_id
        .ok_or_else(|| Error::QueryBuilderError("Subscribed listing without a person".into()))?;
      let followed = follow::table
        .filter(follow::follower_id.eq(my_person_id))
        .select(follow::followed_id);
      count_query = count_query.filter(post::creator_id.eq_any(followed.clone()));
      query = query.filter(post::creator_id.eq_any(followed));
    }

    let total_items = count_query.count().get_result::<i64>(conn).await?;
    let window = page_window(self.page, self.limit, total_items);

    let res = query
      .order_by(post::published.desc())
      .then_order_by(post::id.desc())
      .limit(window.limit)
      .offset(window.offset)
      .load::<PostViewTuple>(conn)
      .await?;

    Ok(Paged {
      items: res.into_iter().map(PostView::from_tuple).collect(),
      page: window.page,
      total_items,
      total_pages: window.total_pages,
      has_next_page: window.has_next_page,
      has_prev_page: window.has_prev_page,
    })
  }
}

impl JoinView for PostView {
  type JoinTuple = PostViewTuple;
  fn from_tuple(a: Self::JoinTuple) -> Self {
    Self {
      post: a.0,
      creator: a.1,
      group: a.2,
    }
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
  use crate::{post_view::PostQuery, structs::PostView};
  use pretty_assertions::assert_eq;
  use quill_db_schema::{
    source::{
      follow::{Follow, FollowForm},
      group::{Group, GroupInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::{Crud, Followable},
    utils::build_db_pool_for_tests,
    ListingType,
  };
  use serial_test::serial;

  struct Data {
    alice: Person,
    bob: Person,
    group: Group,
  }

  async fn init_data(pool: &mut quill_db_schema::utils::DbPool<'_>) -> Data {
    let alice = Person::create(
      pool,
      &PersonInsertForm {
        name: "alice_lists".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let bob = Person::create(
      pool,
      &PersonInsertForm {
        name: "bob_lists".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    let group = Group::create(
      pool,
      &GroupInsertForm {
        title: "Listing group".into(),
        slug: "listing-group".into(),
        description: "Group for listing tests".into(),
      },
    )
    .await
    .unwrap();

    for i in 0..3 {
      Post::create(
        pool,
        &PostInsertForm {
          body: format!("alice post {i}"),
          creator_id: alice.id,
          group_id: Some(group.id),
          ..Default::default()
        },
      )
      .await
      .unwrap();
    }
    Post::create(
      pool,
      &PostInsertForm {
        body: "bob post".into(),
        creator_id: bob.id,
        ..Default::default()
      },
    )
    .await
    .unwrap();

    Data { alice, bob, group }
  }

  async fn cleanup(data: Data, pool: &mut quill_db_schema::utils::DbPool<'_>) {
    Person::delete(pool, data.alice.id).await.unwrap();
    Person::delete(pool, data.bob.id).await.unwrap();
    Group::delete(pool, data.group.id).await.unwrap();
  }

  #[tokio::test]
  #[serial]
  async fn test_listing_filters_and_clamping() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await;

    // Newest first, all posts
    let all = PostQuery {
      page: Some(1),
      limit: Some(2),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert_eq!(2, all.items.len());
    assert_eq!(2, all.total_pages);
    assert!(all.has_next_page);
    assert_eq!("bob post", all.items[0].post.body);

    // Pages past the end get clamped to the last page
    let clamped = PostQuery {
      page: Some(40),
      limit: Some(2),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert_eq!(2, clamped.page);
    assert_eq!(2, clamped.items.len());
    assert!(!clamped.has_next_page);

    // By group
    let in_group = PostQuery {
      group_id: Some(data.group.id),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert_eq!(3, in_group.items.len());
    assert!(in_group
      .items
      .iter()
      .all(|pv| pv.group.as_ref().map(|g| g.id) == Some(data.group.id)));

    // By creator
    let by_bob = PostQuery {
      creator_id: Some(data.bob.id),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert_eq!(1, by_bob.items.len());

    cleanup(data, pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_subscribed_listing() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await;

    // Bob follows no one yet
    let feed = PostQuery {
      listing_type: Some(ListingType::Subscribed),
      my_person_id: Some(data.bob.id),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert!(feed.items.is_empty());

    Follow::follow(
      pool,
      &FollowForm {
        follower_id: data.bob.id,
        followed_id: data.alice.id,
      },
    )
    .await
    .unwrap();

    let feed = PostQuery {
      listing_type: Some(ListingType::Subscribed),
      my_person_id: Some(data.bob.id),
      ..Default::default()
    }
    .list(pool)
    .await
    .unwrap();
    assert_eq!(3, feed.items.len());
    assert!(feed
      .items
      .iter()
      .all(|pv| pv.creator.id == data.alice.id));

    // Single post read carries the creator and group along
    let read = PostView::read(pool, feed.items[0].post.id).await.unwrap();
    assert_eq!(feed.items[0], read);

    cleanup(data, pool).await;
  }
}
