#[macro_use]
extern crate diesel;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod impls;
pub mod newtypes;
pub mod schema;
pub mod source;
pub mod traits;
pub mod utils;

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
/// Which posts a listing covers.
pub enum ListingType {
  /// Every post on the site.
  #[default]
  All,
  /// Only posts by authors the requesting user follows.
  Subscribed,
}
