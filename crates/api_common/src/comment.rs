use crate::sensitive::Sensitive;
use quill_db_schema::newtypes::PostId;
use quill_db_views::structs::CommentView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Comment on a post.
pub struct CreateComment {
  pub body: String,
  pub post_id: PostId,
  pub auth: Sensitive<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment_view: CommentView,
}
