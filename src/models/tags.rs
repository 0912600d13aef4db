use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTag {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(rename = "id")]
  pub tag_id: i64,
  pub name: String,
  #[serde(default)]
  pub slug: String,
}

impl ProductTag {
  pub fn with_site_id(self, site_id: i64) -> Self {
    ProductTag { site_id, ..self }
  }
}

impl Record for ProductTag {
  type Key = (i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.tag_id)
  }
}

/// Response of the tags batch endpoint. Entries the backend refused come back
/// as error objects and are skipped.
#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct ProductTagBatch {
  #[serde(default)]
  pub create: Vec<serde_json::Value>,
  #[serde(default)]
  pub delete: Vec<serde_json::Value>,
}

impl ProductTagBatch {
  pub fn into_tags(entries: Vec<serde_json::Value>, site_id: i64) -> Vec<ProductTag> {
    entries
      .into_iter()
      .filter_map(|entry| serde_json::from_value::<ProductTag>(entry).ok())
      .filter(|tag| tag.tag_id != 0)
      .map(|tag| tag.with_site_id(site_id))
      .collect()
  }
}
