pub mod claims;
pub mod comment;
pub mod context;
pub mod group;
pub mod person;
pub mod post;
pub mod sensitive;
pub mod site;
pub mod utils;

pub extern crate quill_db_schema;
pub extern crate quill_db_views;
pub extern crate quill_utils;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
