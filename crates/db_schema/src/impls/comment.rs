use crate::{
  schema::comment,
  source::comment::{Comment, CommentInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error};
use diesel_async::RunQueryDsl;

impl Comment {
  pub async fn create(pool: &mut DbPool<'_>, form: &CommentInsertForm) -> Result<Comment, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Comment>(conn)
      .await
  }
}
