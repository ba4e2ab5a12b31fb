use crate::sensitive::Sensitive;
use quill_db_schema::{
  newtypes::{GroupId, PostId},
  ListingType,
};
use quill_db_views::structs::{CommentView, PostView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetch a page of the post listing.
pub struct GetPosts {
  pub listing_type: Option<ListingType>,
  pub group_id: Option<GroupId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
  pub auth: Option<Sensitive<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
  pub page: i64,
  pub total_pages: i64,
  pub has_next_page: bool,
  pub has_prev_page: bool,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// A single post with its comments.
pub struct GetPost {
  pub id: PostId,
  pub auth: Option<Sensitive<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePost {
  pub body: String,
  pub group_id: Option<GroupId>,
  pub image_url: Option<Url>,
  pub auth: Sensitive<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// Edit your own post. Omitted fields keep their values.
pub struct EditPost {
  pub post_id: PostId,
  pub body: Option<String>,
  /// Moves the post to another group. There is no way to detach a post from
  /// its group through an edit, only to pick a different one.
  pub group_id: Option<GroupId>,
  /// An empty string erases the stored url.
  pub image_url: Option<String>,
  pub auth: Sensitive<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}
