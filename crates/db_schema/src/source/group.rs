use crate::{newtypes::GroupId, schema::groups};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = groups)]
/// A group which posts can be filed under.
pub struct Group {
  pub id: GroupId,
  pub title: String,
  /// The url-safe handle, unique on the site.
  pub slug: String,
  pub description: String,
  pub published: DateTime<Utc>,
}

#[derive(Clone, Default, Insertable)]
#[diesel(table_name = groups)]
pub struct GroupInsertForm {
  pub title: String,
  pub slug: String,
  pub description: String,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = groups)]
pub struct GroupUpdateForm {
  pub title: Option<String>,
  pub description: Option<String>,
}
