pub mod api_routes_http;

use actix_web::{middleware, web::Data, App, HttpServer};
use quill_api_common::context::QuillContext;
use quill_db_schema::utils::build_db_pool;
use quill_utils::{error::QuillResult, settings::SETTINGS};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Sets up the database pool, runs migrations and serves the API until
/// shutdown.
pub async fn start_quill_server() -> QuillResult<()> {
  let settings = SETTINGS.to_owned();

  let pool = build_db_pool().await?;

  info!(
    "Starting http server at {}:{}",
    settings.bind, settings.port
  );

  HttpServer::new(move || {
    let context = QuillContext::create(pool.clone());
    App::new()
      .wrap(middleware::Compress::default())
      .wrap(TracingLogger::default())
      .app_data(Data::new(context))
      .configure(api_routes_http::config)
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}
