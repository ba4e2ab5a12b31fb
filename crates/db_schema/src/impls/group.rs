use crate::{
  newtypes::GroupId,
  schema::groups,
  source::group::{Group, GroupInsertForm, GroupUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Group {
  type InsertForm = GroupInsertForm;
  type UpdateForm = GroupUpdateForm;
  type IdType = GroupId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(groups::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, group_id: GroupId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    groups::table.find(group_id).first::<Self>(conn).await
  }

  async fn delete(pool: &mut DbPool<'_>, group_id: GroupId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(groups::table.find(group_id))
      .execute(conn)
      .await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    group_id: GroupId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(groups::table.find(group_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Group {
  pub async fn read_from_slug(pool: &mut DbPool<'_>, group_slug: &str) -> Result<Group, Error> {
    let conn = &mut get_conn(pool).await?;
    groups::table
      .filter(groups::slug.eq(group_slug))
      .first::<Group>(conn)
      .await
  }

  pub async fn list(pool: &mut DbPool<'_>) -> Result<Vec<Group>, Error> {
    let conn = &mut get_conn(pool).await?;
    groups::table
      .order_by(groups::title.asc())
      .load::<Group>(conn)
      .await
  }
}
