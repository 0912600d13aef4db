use std::{env, error::Error, sync::Arc};

use megacommerce_stores::{
  actions::{completion, AccountAction, CouponAction},
  manager::{config::load_config, StoresManager, StoresManagerArgs},
  models::{accounts::Site, coupons::Coupon},
  network::mock::MockNetwork,
  storage::Cache,
  telemetry::init_tracing,
};
use serde_json::json;
use tracing::info;

/// Runs a sites and coupons sync against canned responses.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let config_path = env::args().nth(1).unwrap_or_else(|| "config.yaml".to_string());
  let config = load_config(&config_path)?;
  init_tracing(&config.log.level)?;

  let network = Arc::new(MockNetwork::new());
  network.simulate_json(
    "me/sites",
    &json!({"sites": [
      {"ID": 1, "name": "Demo", "URL": "https://demo.example", "is_woocommerce_active": true}
    ]}),
  );
  network.simulate_json(
    "coupons",
    &json!({"data": [
      {"id": 10, "code": "welcome", "amount": "10.00", "discount_type": "percent"},
      {"id": 11, "code": "freeship", "amount": "0.00", "free_shipping": true}
    ]}),
  );

  let cache = Arc::new(Cache::new());
  let manager = StoresManager::new(StoresManagerArgs { config, network, cache: cache.clone() })?;
  let dispatcher = manager.dispatcher();

  let (on_completion, pending) = completion();
  dispatcher.dispatch(AccountAction::SynchronizeSites { selected_site_id: None, on_completion }.into());
  pending.wait().await?;

  let (on_completion, pending) = completion();
  dispatcher.dispatch(
    CouponAction::SynchronizeCoupons { site_id: 1, page_number: 1, page_size: 25, on_completion }
      .into(),
  );
  let has_next_page = pending.wait().await?;

  info!(
    sites = cache.count_all::<Site>(),
    coupons = cache.count_all::<Coupon>(),
    has_next_page,
    "sync finished"
  );
  Ok(())
}
