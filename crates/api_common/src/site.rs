use crate::sensitive::Sensitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Drop every cached listing page. Admins only.
pub struct PurgeListingCache {
  pub auth: Sensitive<String>,
}
