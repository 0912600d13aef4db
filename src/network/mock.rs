use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::{
  models::errors::NetworkError,
  network::{Network, Request},
};

type Response = Result<Vec<u8>, NetworkError>;

/// Network double answering requests from canned responses registered per
/// path suffix. Responses queued for a suffix are consumed in order; the last
/// one keeps answering.
#[derive(Debug, Default)]
pub struct MockNetwork {
  responses: Mutex<HashMap<String, VecDeque<Response>>>,
  requests: Mutex<Vec<Request>>,
}

impl MockNetwork {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn simulate_response(&self, suffix: &str, body: impl Into<Vec<u8>>) {
    self.push(suffix, Ok(body.into()));
  }

  pub fn simulate_json(&self, suffix: &str, body: &Value) {
    self.push(suffix, Ok(body.to_string().into_bytes()));
  }

  pub fn simulate_error(&self, suffix: &str, error: NetworkError) {
    self.push(suffix, Err(error));
  }

  /// Simulates a bare status code: 2xx answers with an empty body.
  pub fn simulate_status(&self, suffix: &str, code: u16) {
    match NetworkError::from_status(code) {
      Some(error) => self.push(suffix, Err(error)),
      None => self.push(suffix, Ok(Vec::new())),
    }
  }

  pub fn remove_all_simulated_responses(&self) {
    self.responses.lock().clear();
  }

  pub fn requests(&self) -> Vec<Request> {
    self.requests.lock().clone()
  }

  pub fn requests_for(&self, suffix: &str) -> Vec<Request> {
    self.requests.lock().iter().filter(|request| request.path.ends_with(suffix)).cloned().collect()
  }

  fn push(&self, suffix: &str, response: Response) {
    self.responses.lock().entry(suffix.to_string()).or_default().push_back(response);
  }
}

#[async_trait]
impl Network for MockNetwork {
  async fn response_data(&self, request: &Request) -> Result<Vec<u8>, NetworkError> {
    self.requests.lock().push(request.clone());

    let mut responses = self.responses.lock();
    let queue = responses
      .iter_mut()
      .filter(|(suffix, _)| request.path.ends_with(suffix.as_str()))
      .max_by_key(|(suffix, _)| suffix.len())
      .map(|(_, queue)| queue);

    let Some(queue) = queue else {
      return Err(NetworkError::NotFound { code: 404 });
    };

    match queue.len() {
      0 => Err(NetworkError::NotFound { code: 404 }),
      1 => queue.front().cloned().unwrap_or(Err(NetworkError::NotFound { code: 404 })),
      _ => queue.pop_front().unwrap_or(Err(NetworkError::NotFound { code: 404 })),
    }
  }
}

#[cfg(test)]
mod tests {
  use http::Method;

  use super::*;

  fn get(path: &str) -> Request {
    Request::woo(Method::GET, 1, path)
  }

  #[tokio::test]
  async fn queued_responses_are_consumed_in_order_and_the_last_sticks() {
    let network = MockNetwork::new();
    network.simulate_response("tags", "first");
    network.simulate_error("tags", NetworkError::Timeout);

    assert_eq!(network.response_data(&get("products/tags")).await, Ok(b"first".to_vec()));
    assert_eq!(network.response_data(&get("products/tags")).await, Err(NetworkError::Timeout));
    assert_eq!(network.response_data(&get("products/tags")).await, Err(NetworkError::Timeout));
    assert_eq!(network.requests_for("tags").len(), 3);
  }

  #[tokio::test]
  async fn the_longest_matching_suffix_wins() {
    let network = MockNetwork::new();
    network.simulate_response("variations", "list");
    network.simulate_response("variations/7", "single");

    assert_eq!(
      network.response_data(&get("products/3/variations/7")).await,
      Ok(b"single".to_vec())
    );
    assert_eq!(network.response_data(&get("products/3/variations")).await, Ok(b"list".to_vec()));
  }

  #[tokio::test]
  async fn unstubbed_requests_are_not_found() {
    let network = MockNetwork::new();
    network.simulate_status("coupons", 500);

    assert_eq!(
      network.response_data(&get("orders")).await,
      Err(NetworkError::NotFound { code: 404 })
    );
    assert_eq!(
      network.response_data(&get("coupons")).await,
      Err(NetworkError::UnacceptableStatusCode { code: 500 })
    );

    network.remove_all_simulated_responses();
    assert!(network.response_data(&get("coupons")).await.is_err());
  }
}
