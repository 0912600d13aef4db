mod accounts;
mod attributes;
mod coupons;
mod domains;
mod order_statuses;
mod orders;
mod products;
mod refunds;
mod sites;
mod stats;
mod tags;
mod variations;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
  models::errors::{DotcomError, StoreError},
  network::{Api, Network, Request},
  utils::net::validate_url_target,
};

/// Builds requests for every backend endpoint and decodes their responses.
#[derive(Debug, Clone)]
pub struct Remote {
  network: Arc<dyn Network>,
  base_url: Arc<str>,
}

#[derive(Debug)]
pub struct RemoteArgs {
  pub network: Arc<dyn Network>,
  pub base_url: String,
}

impl Remote {
  pub fn new(args: RemoteArgs) -> Self {
    Self { network: args.network, base_url: args.base_url.into() }
  }

  pub(crate) async fn enqueue<T: DeserializeOwned>(&self, request: Request) -> Result<T, StoreError> {
    let document = self.enqueue_document(&request).await?;
    serde_json::from_value(document).map_err(|err| {
      warn!(path = "stores.remote.enqueue", request = %request.path, "mapping error: {}", err);
      StoreError::Decoding(err)
    })
  }

  async fn enqueue_document(&self, request: &Request) -> Result<Value, StoreError> {
    let url = request.url(&self.base_url);
    validate_url_target(&url)?;
    debug!(path = "stores.remote.enqueue", method = %request.method, url = %url, "enqueue");

    let data = self.network.response_data(request).await?;
    if data.is_empty() {
      return Err(StoreError::EmptyResponse);
    }

    let document: Value = serde_json::from_slice(&data)?;
    if let Some(err) = DotcomError::from_document(&document) {
      return Err(err.into());
    }

    Ok(match (request.api, document) {
      (Api::WooCommerce, Value::Object(mut envelope)) if envelope.contains_key("data") => {
        envelope.remove("data").unwrap_or(Value::Null)
      }
      (_, document) => document,
    })
  }
}

#[cfg(test)]
mod tests {
  use http::Method;
  use serde_json::json;

  use super::*;
  use crate::{models::errors::NetworkError, network::mock::MockNetwork};

  fn remote(network: Arc<MockNetwork>, base_url: &str) -> Remote {
    Remote::new(RemoteArgs { network, base_url: base_url.to_string() })
  }

  #[tokio::test]
  async fn woo_responses_are_unwrapped_from_the_data_envelope() {
    let network = Arc::new(MockNetwork::new());
    network.simulate_json("numbers", &json!({"data": [1, 2, 3]}));

    let numbers: Vec<i32> = remote(network, "https://example.com")
      .enqueue(Request::woo(Method::GET, 1, "numbers"))
      .await
      .unwrap();
    assert_eq!(numbers, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn dotcom_responses_are_decoded_as_is() {
    let network = Arc::new(MockNetwork::new());
    network.simulate_json("me", &json!({"data": 5}));

    let document: Value =
      remote(network, "https://example.com").enqueue(Request::dotcom(Method::GET, "me")).await.unwrap();
    assert_eq!(document, json!({"data": 5}));
  }

  #[tokio::test]
  async fn backend_error_envelopes_become_dotcom_errors() {
    let network = Arc::new(MockNetwork::new());
    network.simulate_json("sites/new", &json!({"error": "blog_name_exists", "message": "taken"}));

    let result: Result<Value, _> =
      remote(network, "https://example.com").enqueue(Request::dotcom(Method::POST, "sites/new")).await;
    match result {
      Err(StoreError::Dotcom(DotcomError::Unknown { code, .. })) => assert_eq!(code, "blog_name_exists"),
      other => panic!("unexpected result {other:?}"),
    }
  }

  #[tokio::test]
  async fn empty_bodies_and_bad_urls_are_rejected() {
    let network = Arc::new(MockNetwork::new());
    network.simulate_status("me", 200);

    let result: Result<Value, _> =
      remote(network.clone(), "https://example.com").enqueue(Request::dotcom(Method::GET, "me")).await;
    assert!(matches!(result, Err(StoreError::EmptyResponse)));

    let result: Result<Value, _> =
      remote(network.clone(), "not a host").enqueue(Request::dotcom(Method::GET, "me")).await;
    assert!(matches!(result, Err(StoreError::Network(NetworkError::InvalidUrl))));
    assert_eq!(network.requests().len(), 1);
  }

  #[tokio::test]
  async fn malformed_payloads_are_decoding_errors() {
    let network = Arc::new(MockNetwork::new());
    network.simulate_json("numbers", &json!({"data": ["one"]}));

    let result: Result<Vec<i32>, _> =
      remote(network, "https://example.com").enqueue(Request::woo(Method::GET, 1, "numbers")).await;
    assert!(matches!(result, Err(StoreError::Decoding(_))));
  }
}
