use quill_db_schema::source::{
  comment::Comment,
  group::Group,
  local_user::LocalUser,
  person::Person,
  post::Post,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A post, with its author and the group it was filed under.
pub struct PostView {
  pub post: Post,
  pub creator: Person,
  pub group: Option<Group>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A comment, with its author.
pub struct CommentView {
  pub comment: Comment,
  pub creator: Person,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A local account with the person it belongs to.
pub struct LocalUserView {
  pub local_user: LocalUser,
  pub person: Person,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// One page out of a listing, along with where that page sits.
pub struct Paged<T> {
  pub items: Vec<T>,
  /// The page actually served, after clamping.
  pub page: i64,
  pub total_items: i64,
  pub total_pages: i64,
  pub has_next_page: bool,
  pub has_prev_page: bool,
}
