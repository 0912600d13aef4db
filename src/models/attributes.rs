use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(rename = "id")]
  pub attribute_id: i64,
  pub name: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default, rename = "type")]
  pub attribute_type: String,
  #[serde(default)]
  pub order_by: String,
  #[serde(default)]
  pub has_archives: bool,
}

impl ProductAttribute {
  pub fn with_site_id(self, site_id: i64) -> Self {
    ProductAttribute { site_id, ..self }
  }
}

impl Record for ProductAttribute {
  type Key = (i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.attribute_id)
  }
}

/// A term belongs to exactly one attribute, referenced by `attribute_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributeTerm {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(default, skip_serializing)]
  pub attribute_id: i64,
  #[serde(rename = "id")]
  pub term_id: i64,
  pub name: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub count: i64,
}

impl ProductAttributeTerm {
  pub fn with_parent(self, site_id: i64, attribute_id: i64) -> Self {
    ProductAttributeTerm { site_id, attribute_id, ..self }
  }
}

impl Record for ProductAttributeTerm {
  type Key = (i64, i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.attribute_id, self.term_id)
  }
}
