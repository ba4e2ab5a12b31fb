use crate::{
  newtypes::PersonId,
  schema::person,
  source::person::{Person, PersonInsertForm, PersonUpdateForm},
  traits::Crud,
  utils::{functions::lower, get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    person::table.find(person_id).first::<Self>(conn).await
  }

  async fn delete(pool: &mut DbPool<'_>, person_id: PersonId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(person_id))
      .execute(conn)
      .await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Person {
  /// Case-insensitive lookup by login name.
  pub async fn read_from_name(pool: &mut DbPool<'_>, from_name: &str) -> Result<Person, Error> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(lower(person::name).eq(from_name.to_lowercase()))
      .first::<Person>(conn)
      .await
  }
}
