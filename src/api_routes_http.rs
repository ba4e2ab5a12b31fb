use actix_web::web;
use quill_api::{
  local_user::login::login,
  person::{follow::follow_person, read::get_person_details},
  site::purge_listing_cache::purge_listing_cache,
};
use quill_api_crud::{
  comment::create::create_comment,
  group::{create::create_group, list::list_groups, read::get_group},
  post::{create::create_post, list::list_posts, read::get_post, update::update_post},
  user::create::register,
};

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Post
      .service(
        web::scope("/post")
          .route("", web::post().to(create_post))
          .route("", web::get().to(get_post))
          .route("", web::put().to(update_post))
          .route("/list", web::get().to(list_posts)),
      )
      // Comment
      .service(web::resource("/comment").route(web::post().to(create_comment)))
      // Group
      .service(
        web::scope("/group")
          .route("", web::post().to(create_group))
          .route("", web::get().to(get_group))
          .route("/list", web::get().to(list_groups)),
      )
      // Person
      .service(
        web::scope("/user")
          .route("", web::get().to(get_person_details))
          .route("/register", web::post().to(register))
          .route("/login", web::post().to(login))
          .route("/follow", web::post().to(follow_person)),
      )
      // Admin
      .service(
        web::scope("/admin")
          .route("/purge_listing_cache", web::post().to(purge_listing_cache)),
      ),
  );
}
