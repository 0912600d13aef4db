use serde::{Deserialize, Deserializer};

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
  #[serde(rename = "ID")]
  pub user_id: i64,
  pub display_name: String,
  pub email: String,
  pub username: String,
  #[serde(default, rename = "avatar_URL")]
  pub gravatar_url: Option<String>,
}

impl Record for Account {
  type Key = i64;

  fn key(&self) -> Self::Key {
    self.user_id
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Site {
  #[serde(rename = "ID")]
  pub site_id: i64,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(rename = "URL")]
  pub url: String,
  #[serde(default)]
  pub is_woocommerce_active: bool,
  /// Hours from UTC, sent inside the requested `options` object.
  #[serde(default, rename = "options", deserialize_with = "gmt_offset_from_options")]
  pub gmt_offset: f64,
}

impl Record for Site {
  type Key = i64;

  fn key(&self) -> Self::Key {
    self.site_id
  }
}

fn gmt_offset_from_options<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
  #[derive(Deserialize)]
  struct Options {
    #[serde(default)]
    gmt_offset: f64,
  }

  Ok(Options::deserialize(deserializer)?.gmt_offset)
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SiteList {
  pub sites: Vec<Site>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountResult {
  #[serde(rename = "bearer_token")]
  pub auth_token: String,
  pub username: String,
}
