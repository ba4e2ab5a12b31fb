use crate::structs::LocalUserView;
use diesel::{result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use quill_db_schema::{
  newtypes::LocalUserId,
  schema::{local_user, person},
  source::{local_user::LocalUser, person::Person},
  traits::JoinView,
  utils::{functions::lower, get_conn, DbPool},
};

type LocalUserViewTuple = (LocalUser, Person);

impl LocalUserView {
  pub async fn read(pool: &mut DbPool<'_>, local_user_id: LocalUserId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = local_user::table
      .find(local_user_id)
      .inner_join(person::table)
      .select((local_user::all_columns, person::all_columns))
      .first::<LocalUserViewTuple>(conn)
      .await?;
    Ok(Self::from_tuple(res))
  }

  /// Login lookup. The name comparison is case-insensitive.
  pub async fn find_by_name(pool: &mut DbPool<'_>, name: &str) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = local_user::table
      .inner_join(person::table)
      .filter(lower(person::name).eq(name.to_lowercase()))
      .select((local_user::all_columns, person::all_columns))
      .first::<LocalUserViewTuple>(conn)
      .await?;
    Ok(Self::from_tuple(res))
  }
}

impl JoinView for LocalUserView {
  type JoinTuple = LocalUserViewTuple;
  fn from_tuple(a: Self::JoinTuple) -> Self {
    Self {
      local_user: a.0,
      person: a.1,
    }
  }
}
