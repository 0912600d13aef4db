pub mod mock;

use std::{collections::BTreeMap, fmt};

use async_trait::async_trait;
use http::Method;
use serde_json::Value;

use crate::models::errors::NetworkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
  /// WooCommerce REST endpoints tunnelled through the site connection.
  /// Responses arrive wrapped in `{"data": ..}`.
  WooCommerce,
  Dotcom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
  pub method: Method,
  pub api: Api,
  pub site_id: Option<i64>,
  pub path: String,
  pub params: BTreeMap<String, String>,
  pub body: Option<Value>,
}

impl Request {
  pub fn woo(method: Method, site_id: i64, path: impl Into<String>) -> Self {
    Request {
      method,
      api: Api::WooCommerce,
      site_id: Some(site_id),
      path: path.into(),
      params: BTreeMap::new(),
      body: None,
    }
  }

  pub fn dotcom(method: Method, path: impl Into<String>) -> Self {
    Request {
      method,
      api: Api::Dotcom,
      site_id: None,
      path: path.into(),
      params: BTreeMap::new(),
      body: None,
    }
  }

  pub fn param(mut self, key: &str, value: impl ToString) -> Self {
    self.params.insert(key.to_string(), value.to_string());
    self
  }

  pub fn body(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }

  pub fn url(&self, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match (self.api, self.site_id) {
      (Api::WooCommerce, Some(site_id)) => {
        format!("{base}/rest/v1.1/jetpack-blogs/{site_id}/rest-api/?path=/wc/v3/{}", self.path)
      }
      _ => format!("{base}/rest/v1.1/{}", self.path),
    }
  }
}

/// Executes a request and hands back the raw response body.
#[async_trait]
pub trait Network: fmt::Debug + Send + Sync {
  async fn response_data(&self, request: &Request) -> Result<Vec<u8>, NetworkError>;
}
