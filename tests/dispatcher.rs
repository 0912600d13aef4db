mod common;

use std::sync::Arc;

use common::{Harness, SITE_ID};
use megacommerce_stores::{
  actions::{completion, ActionDomain, CouponAction, ProductAction},
  models::{config::SyncConfig, coupons::Coupon, errors::StoreError},
  network::mock::MockNetwork,
  remote::{Remote, RemoteArgs},
  storage::Cache,
  stores::{
    dispatcher::{ActionSink, DispatchError, Dispatcher},
    ActionProcessor, CouponStore, StoreArgs,
  },
};
use tokio::task::JoinSet;

fn coupon_store() -> CouponStore {
  let network = Arc::new(MockNetwork::new());
  CouponStore::new(StoreArgs {
    remote: Remote::new(RemoteArgs { network, base_url: "https://example.com".into() }),
    cache: Arc::new(Cache::new()),
    config: Arc::new(SyncConfig::default()),
  })
}

#[tokio::test]
async fn stores_drop_actions_of_another_domain() {
  let store = coupon_store();
  let (on_completion, pending) = completion::<()>();

  store.process(ProductAction::ResetStoredProducts { on_completion }.into());

  assert!(matches!(pending.wait().await, Err(StoreError::CompletionDropped)));
}

#[tokio::test]
async fn a_second_store_for_a_domain_is_refused() {
  let dispatcher = Dispatcher::new();
  dispatcher.register(coupon_store()).unwrap();

  assert_eq!(
    dispatcher.register(coupon_store()),
    Err(DispatchError::DuplicateProcessor(ActionDomain::Coupon))
  );

  let (on_completion, pending) = completion::<()>();
  dispatcher.dispatch(ProductAction::ResetStoredProducts { on_completion }.into());
  assert!(matches!(pending.wait().await, Err(StoreError::CompletionDropped)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_actions_each_complete_once() {
  let h = Arc::new(Harness::new());
  h.respond("coupons/720", "coupon");

  let mut tasks = JoinSet::new();
  for _ in 0..16 {
    let h = h.clone();
    tasks.spawn(async move {
      h.run(|on_completion| {
        CouponAction::RetrieveCoupon { site_id: SITE_ID, coupon_id: 720, on_completion }.into()
      })
      .await
    });
  }

  while let Some(joined) = tasks.join_next().await {
    assert_eq!(joined.unwrap().unwrap().coupon_id, 720);
  }
  assert_eq!(h.cache.count_all::<Coupon>(), 1);
  assert_eq!(h.network.requests_for("coupons/720").len(), 16);
}
