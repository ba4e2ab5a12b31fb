use crate::sensitive::Sensitive;
use quill_db_schema::source::group::Group;
use quill_db_views::structs::PostView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Create a group. Admins only.
pub struct CreateGroup {
  pub title: String,
  pub slug: String,
  pub description: String,
  pub auth: Sensitive<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupResponse {
  pub group: Group,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GetGroups {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetGroupsResponse {
  pub groups: Vec<Group>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// A group's page: the group itself plus a page of its posts.
pub struct GetGroup {
  pub slug: String,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetGroupResponse {
  pub group: Group,
  pub posts: Vec<PostView>,
  pub page: i64,
  pub total_pages: i64,
  pub has_next_page: bool,
  pub has_prev_page: bool,
}
