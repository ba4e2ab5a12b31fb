use quill_db_schema::utils::{ActualDbPool, DbPool};
use quill_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct QuillContext {
  pool: ActualDbPool,
}

impl QuillContext {
  pub fn create(pool: ActualDbPool) -> QuillContext {
    QuillContext { pool }
  }
  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }
  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }
  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
