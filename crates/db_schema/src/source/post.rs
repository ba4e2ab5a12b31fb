use crate::{
  newtypes::{DbUrl, GroupId, PersonId, PostId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = post)]
/// A post.
pub struct Post {
  pub id: PostId,
  pub body: String,
  pub creator_id: PersonId,
  /// Optional. Deleting the group leaves the post in place with this cleared.
  pub group_id: Option<GroupId>,
  pub image_url: Option<DbUrl>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Clone, Default, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub body: String,
  pub creator_id: PersonId,
  pub group_id: Option<GroupId>,
  pub image_url: Option<DbUrl>,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub body: Option<String>,
  pub group_id: Option<Option<GroupId>>,
  pub image_url: Option<Option<DbUrl>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
