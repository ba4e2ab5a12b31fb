use crate::sensitive::Sensitive;
use quill_db_schema::{newtypes::PersonId, source::person::Person};
use quill_db_views::structs::PostView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Create a new account.
pub struct Register {
  pub username: String,
  pub password: Sensitive<String>,
  pub password_verify: Sensitive<String>,
  pub email: Option<Sensitive<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Log into the site.
pub struct Login {
  pub username_or_email: Sensitive<String>,
  pub password: Sensitive<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
  /// Missing only when registration succeeded but login isn't possible yet.
  pub jwt: Option<Sensitive<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// A person's profile page, with their posts.
pub struct GetPersonDetails {
  pub person_id: Option<PersonId>,
  /// Either person_id or name must be given.
  pub username: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
  pub auth: Option<Sensitive<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPersonDetailsResponse {
  pub person: Person,
  pub posts: Vec<PostView>,
  pub page: i64,
  pub total_pages: i64,
  pub has_next_page: bool,
  pub has_prev_page: bool,
  pub post_count: i64,
  pub follower_count: i64,
  /// Whether the requesting user follows this person. False for anonymous
  /// viewers and for your own profile.
  pub follows: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Follow or unfollow a person.
pub struct FollowPerson {
  pub person_id: PersonId,
  pub follow: bool,
  pub auth: Sensitive<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FollowPersonResponse {
  pub person: Person,
  pub followed: bool,
}
