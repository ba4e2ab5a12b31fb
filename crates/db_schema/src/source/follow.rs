use crate::{newtypes::PersonId, schema::follow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = follow, primary_key(follower_id, followed_id))]
/// One person following another's posts.
pub struct Follow {
  pub follower_id: PersonId,
  pub followed_id: PersonId,
  pub published: DateTime<Utc>,
}

// No AsChangeset here: every column is part of the key, and the upsert
// only ever touches `published`.
#[derive(Clone, Insertable)]
#[diesel(table_name = follow)]
pub struct FollowForm {
  pub follower_id: PersonId,
  pub followed_id: PersonId,
}
