use actix_web::web::{Data, Json, Query};
use moka::future::Cache;
use once_cell::sync::Lazy;
use quill_api_common::{
  context::QuillContext,
  post::{GetPosts, GetPostsResponse},
  utils::local_user_view_from_jwt_opt,
};
use quill_db_schema::{newtypes::GroupId, ListingType};
use quill_db_views::post_view::PostQuery;
use quill_utils::{
  error::{QuillErrorType, QuillResult},
  settings::SETTINGS,
};
use std::time::Duration;

#[derive(Clone, Hash, PartialEq, Eq)]
struct ListingKey {
  group_id: Option<GroupId>,
  page: Option<i64>,
  limit: Option<i64>,
}

/// Cached pages of the anonymous listing. Logged-in requests skip this
/// entirely, since their Subscribed feed is per-person.
static LISTING_CACHE: Lazy<Cache<ListingKey, GetPostsResponse>> = Lazy::new(|| {
  Cache::builder()
    .max_capacity(1000)
    .time_to_live(Duration::from_secs(SETTINGS.listing.cache_seconds))
    .build()
});

/// Drops every cached listing page, so the next reads hit the database.
pub async fn purge_listing_cache() {
  LISTING_CACHE.invalidate_all();
}

#[tracing::instrument(skip(context))]
pub async fn list_posts(
  data: Query<GetPosts>,
  context: Data<QuillContext>,
) -> QuillResult<Json<GetPostsResponse>> {
  let local_user_view = local_user_view_from_jwt_opt(data.auth.as_ref(), &context).await;
  let data = data.into_inner();

  if local_user_view.is_none() {
    let key = ListingKey {
      group_id: data.group_id,
      page: data.page,
      limit: data.limit,
    };
    let res = LISTING_CACHE
      .try_get_with(key, load_listing(&data, None, &context))
      .await
      .map_err(|e| e.error_type.clone())?;
    return Ok(Json(res));
  }

  let my_person_id = local_user_view.map(|u| u.person.id);
  Ok(Json(load_listing(&data, my_person_id, &context).await?))
}

async fn load_listing(
  data: &GetPosts,
  my_person_id: Option<quill_db_schema::newtypes::PersonId>,
  context: &QuillContext,
) -> QuillResult<GetPostsResponse> {
  // The Subscribed feed requires a login
  let listing_type = data.listing_type.unwrap_or_default();
  if listing_type == ListingType::Subscribed && my_person_id.is_none() {
    return Err(QuillErrorType::NotLoggedIn.into());
  }

  let paged = PostQuery {
    listing_type: Some(listing_type),
    group_id: data.group_id,
    creator_id: None,
    my_person_id,
    page: data.page,
    limit: data.limit.or(Some(SETTINGS.listing.page_size)),
  }
  .list(&mut context.pool())
  .await?;

  Ok(GetPostsResponse {
    posts: paged.items,
    page: paged.page,
    total_pages: paged.total_pages,
    has_next_page: paged.has_next_page,
    has_prev_page: paged.has_prev_page,
  })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
  use super::{list_posts, purge_listing_cache};
  use actix_web::web::{Data, Json, Query};
  use pretty_assertions::assert_eq;
  use quill_api_common::{context::QuillContext, post::GetPosts};
  use quill_db_schema::{
    source::{
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_anonymous_listing_is_cached_until_purge() {
    let actual_pool = build_db_pool_for_tests().await;
    let pool = &mut (&actual_pool).into();
    let context = Data::new(QuillContext::create(actual_pool.clone()));

    let author = Person::create(
      pool,
      &PersonInsertForm {
        name: "cache_author".into(),
        ..Default::default()
      },
    )
    .await
    .unwrap();

    Post::create(
      pool,
      &PostInsertForm {
        body: "a post everyone can see".into(),
        creator_id: author.id,
        ..Default::default()
      },
    )
    .await
    .unwrap();

    // Earlier tests may have left pages behind
    purge_listing_cache().await;

    let query = GetPosts {
      limit: Some(50),
      ..Default::default()
    };
    let Json(first) = list_posts(Query(query.clone()), context.clone())
      .await
      .unwrap();
    let seen = first.posts.len();

    Post::create(
      pool,
      &PostInsertForm {
        body: "a post created after the page was cached".into(),
        creator_id: author.id,
        ..Default::default()
      },
    )
    .await
    .unwrap();

    // Within the TTL the same request serves the cached page
    let Json(cached) = list_posts(Query(query.clone()), context.clone())
      .await
      .unwrap();
    assert_eq!(seen, cached.posts.len());

    // A purge forces a recompute, which picks up the new post
    purge_listing_cache().await;
    let Json(fresh) = list_posts(Query(query), context).await.unwrap();
    assert_eq!(seen + 1, fresh.posts.len());

    Person::delete(pool, author.id).await.unwrap();
    purge_listing_cache().await;
  }
}
