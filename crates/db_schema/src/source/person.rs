use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = person)]
/// A person. Everyone who can author posts has one of these.
pub struct Person {
  pub id: PersonId,
  /// The login name, unique on the site.
  pub name: String,
  /// A shown name, which can contain characters the login name can't.
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Clone, Default, Insertable)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  pub display_name: Option<String>,
  pub bio: Option<String>,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub display_name: Option<Option<String>>,
  pub bio: Option<Option<String>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
