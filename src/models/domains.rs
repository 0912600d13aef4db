use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FreeDomainSuggestion {
  #[serde(rename = "domain_name")]
  pub name: String,
  #[serde(default)]
  pub is_free: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteDomain {
  #[serde(rename = "domain")]
  pub name: String,
  #[serde(default, rename = "primary_domain")]
  pub is_primary: bool,
  #[serde(default, rename = "is_wpcom_staging_domain")]
  pub is_staging: bool,
  #[serde(default, rename = "auto_renewal_date")]
  pub renewal_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SiteDomainList {
  pub domains: Vec<SiteDomain>,
}
