#![allow(dead_code)]

use std::{fs, sync::Arc};

use megacommerce_stores::{
  actions::{completion, Action, Completion},
  manager::{StoresManager, StoresManagerArgs},
  models::{
    config::{Config, SyncConfig},
    errors::StoreError,
  },
  network::mock::MockNetwork,
  storage::Cache,
  stores::dispatcher::ActionSink,
};
use serde_json::Value;

pub const SITE_ID: i64 = 1234;

/// Stores wired against a `MockNetwork` and a fresh cache.
pub struct Harness {
  pub network: Arc<MockNetwork>,
  pub cache: Arc<Cache>,
  pub dispatcher: Arc<dyn ActionSink>,
}

impl Harness {
  pub fn new() -> Self {
    Self::with_sync(SyncConfig::default())
  }

  pub fn with_sync(sync: SyncConfig) -> Self {
    let network = Arc::new(MockNetwork::new());
    let cache = Arc::new(Cache::new());
    let config = Config { sync, ..Config::default() };

    let manager =
      StoresManager::new(StoresManagerArgs { config, network: network.clone(), cache: cache.clone() })
        .expect("stores manager");

    Self { network, cache, dispatcher: manager.dispatcher() }
  }

  /// Dispatches the action built around a fresh completion and waits for it.
  pub async fn run<T>(&self, build: impl FnOnce(Completion<T>) -> Action) -> Result<T, StoreError> {
    let (on_completion, pending) = completion();
    self.dispatcher.dispatch(build(on_completion));
    pending.wait().await
  }

  pub fn respond(&self, suffix: &str, fixture_name: &str) {
    self.network.simulate_json(suffix, &fixture(fixture_name));
  }
}

pub fn fixture(name: &str) -> Value {
  let path = format!("{}/tests/responses/{name}.json", env!("CARGO_MANIFEST_DIR"));
  let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {path}: {err}"));
  serde_json::from_str(&raw).unwrap_or_else(|err| panic!("fixture {path}: {err}"))
}

/// `{"error": code, "message": message}` as the backend sends it.
pub fn backend_error(code: &str, message: &str) -> Value {
  serde_json::json!({ "error": code, "message": message })
}
