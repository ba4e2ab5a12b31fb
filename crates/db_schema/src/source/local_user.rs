use crate::{
  newtypes::{LocalUserId, PersonId},
  schema::local_user,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = local_user)]
/// A local account. Stores the credentials for a [`crate::source::person::Person`].
pub struct LocalUser {
  pub id: LocalUserId,
  pub person_id: PersonId,
  #[serde(skip)]
  pub password_encrypted: String,
  pub email: Option<String>,
  pub admin: bool,
  pub published: DateTime<Utc>,
}

#[derive(Clone, Default, Insertable)]
#[diesel(table_name = local_user)]
pub struct LocalUserInsertForm {
  pub person_id: PersonId,
  pub password_encrypted: String,
  pub email: Option<String>,
  pub admin: Option<bool>,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = local_user)]
pub struct LocalUserUpdateForm {
  pub password_encrypted: Option<String>,
  pub email: Option<Option<String>>,
  pub admin: Option<bool>,
}
