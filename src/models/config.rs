use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
  pub service: ServiceConfig,
  pub sync: SyncConfig,
  pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  pub env: String,
  pub base_url: String,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    ServiceConfig { env: "dev".to_string(), base_url: "https://public-api.wordpress.com".to_string() }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
  pub first_page_number: u32,
  pub default_page_size: u32,
  /// Page size for endpoints synchronized in full (terms, tags), the largest
  /// the API allows.
  pub max_page_size: u32,
}

impl Default for SyncConfig {
  fn default() -> Self {
    SyncConfig { first_page_number: 1, default_page_size: 25, max_page_size: 100 }
  }
}

impl SyncConfig {
  pub fn is_first_page(&self, page_number: u32) -> bool {
    page_number == self.first_page_number
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
  pub level: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    LogConfig { level: "info".to_string() }
  }
}
