use serde::Deserialize;

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderStatus {
  #[serde(default)]
  pub site_id: i64,
  pub slug: String,
  pub name: String,
  #[serde(default)]
  pub total: i64,
}

impl OrderStatus {
  pub fn with_site_id(self, site_id: i64) -> Self {
    OrderStatus { site_id, ..self }
  }
}

impl Record for OrderStatus {
  type Key = (i64, String);

  fn key(&self) -> Self::Key {
    (self.site_id, self.slug.clone())
  }
}
