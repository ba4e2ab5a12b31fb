use crate::newtypes::DbUrl;
use chrono::{DateTime, Utc};
use deadpool::Runtime;
use diesel::{
  result::Error::{self as DieselError, QueryBuilderError},
  Connection,
  PgConnection,
};
use diesel_async::{
  pg::AsyncPgConnection,
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use quill_utils::{
  error::{QuillErrorExt, QuillErrorType, QuillResult},
  settings::SETTINGS,
};
use std::ops::{Deref, DerefMut};
use tracing::info;
use url::Url;

pub const FETCH_LIMIT_DEFAULT: i64 = 10;
pub const FETCH_LIMIT_MAX: i64 = 50;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection. Functions must take `&mut DbPool<'_>` to allow implicit
/// reborrowing.
///
/// https://github.com/rust-lang/rfcs/issues/1403
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> Result<DbConn<'a>, DieselError> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(pool.get().await.map_err(|e| QueryBuilderError(e.into()))?),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl<'a> Deref for DbConn<'a> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl<'a> DerefMut for DbConn<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by passing `&mut
// conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(value: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(value.deref_mut())
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

pub fn now() -> DateTime<Utc> {
  Utc::now()
}

/// Takes an optional API URL-type input, and converts it to an optional diesel DB update.
pub fn diesel_url_update(opt: Option<&str>) -> QuillResult<Option<Option<DbUrl>>> {
  match opt {
    // An empty string is an erase
    Some("") => Ok(Some(None)),
    Some(str_url) => Url::parse(str_url)
      .map(|u| Some(Some(u.into())))
      .with_quill_type(QuillErrorType::InvalidUrl),
    None => Ok(None),
  }
}

/// Takes an optional API URL-type input, and converts it to an optional diesel DB create.
pub fn diesel_url_create(opt: Option<&str>) -> QuillResult<Option<DbUrl>> {
  match opt {
    Some(str_url) => Url::parse(str_url)
      .map(|u| Some(u.into()))
      .with_quill_type(QuillErrorType::InvalidUrl),
    None => Ok(None),
  }
}

fn run_migrations(db_url: &str) -> QuillResult<()> {
  // Migrations run on a blocking connection before the async pool starts serving
  let mut conn = PgConnection::establish(db_url)?;
  info!("Running database migrations (this may take a long time)...");
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| QuillErrorType::Unknown(format!("Couldn't run DB Migrations: {e}")))?;
  info!("Database migrations complete");
  Ok(())
}

pub async fn build_db_pool() -> QuillResult<ActualDbPool> {
  let db_url = SETTINGS.get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()?;

  run_migrations(&db_url)?;

  Ok(pool)
}

#[allow(clippy::expect_used)]
pub async fn build_db_pool_for_tests() -> ActualDbPool {
  build_db_pool().await.expect("db pool missing")
}

pub mod functions {
  use diesel::sql_function;
  use diesel::sql_types::Text;

  sql_function!(fn lower(x: Text) -> Text);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
  use super::diesel_url_update;
  use url::Url;

  #[test]
  fn test_diesel_option_overwrite_to_url() {
    assert!(matches!(diesel_url_update(None), Ok(None)));
    assert!(matches!(diesel_url_update(Some("")), Ok(Some(None))));
    assert!(diesel_url_update(Some("invalid_url")).is_err());
    let example_url = "https://example.com";
    assert!(matches!(
      diesel_url_update(Some(example_url)),
      Ok(Some(Some(url))) if url == Url::parse(example_url).unwrap().into()
    ));
  }
}
