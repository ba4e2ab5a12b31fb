use actix_web::web::{Data, Json};
use quill_api_common::{
  context::QuillContext,
  site::PurgeListingCache,
  utils::{is_admin, local_user_view_from_jwt},
  SuccessResponse,
};
use quill_utils::error::QuillResult;

#[tracing::instrument(skip(context))]
pub async fn purge_listing_cache(
  data: Json<PurgeListingCache>,
  context: Data<QuillContext>,
) -> QuillResult<Json<SuccessResponse>> {
  let local_user_view = local_user_view_from_jwt(&data.auth, &context).await?;
  is_admin(&local_user_view)?;

  quill_api_crud::post::list::purge_listing_cache().await;

  Ok(Json(SuccessResponse::default()))
}
