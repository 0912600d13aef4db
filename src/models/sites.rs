use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCreationResult {
  pub site_id: i64,
  pub name: String,
  pub url: String,
  pub site_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SiteCreationResponse {
  pub success: bool,
  #[serde(default)]
  pub blog_details: Option<BlogDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BlogDetails {
  #[serde(rename = "blogid", deserialize_with = "int_or_string")]
  pub site_id: i64,
  #[serde(rename = "blogname")]
  pub name: String,
  pub url: String,
  #[serde(default)]
  pub site_slug: String,
}

impl From<BlogDetails> for SiteCreationResult {
  fn from(details: BlogDetails) -> Self {
    SiteCreationResult {
      site_id: details.site_id,
      name: details.name,
      url: details.url,
      site_slug: details.site_slug,
    }
  }
}

// The backend sends `blogid` as a string on some endpoints and a number on others.
fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Int(i64),
    Str(String),
  }

  match Raw::deserialize(deserializer)? {
    Raw::Int(id) => Ok(id),
    Raw::Str(id) => id.parse().map_err(serde::de::Error::custom),
  }
}
