pub mod config;

use std::sync::Arc;

use tracing::info;

use crate::{
  models::{config::Config, errors::InternalError},
  network::Network,
  remote::{Remote, RemoteArgs},
  storage::Cache,
  stores::{
    dispatcher::{ActionSink, Dispatcher},
    AccountStore, CouponStore, DomainStore, OrderStatusStore, OrderStore, ProductAttributeStore,
    ProductAttributeTermStore, ProductStore, ProductTagStore, ProductVariationStore, RefundStore,
    SiteStore, StatsStore, StoreArgs,
  },
  utils::net::validate_url_target,
};

/// Owns the dispatcher with one store registered per domain, all sharing a
/// single remote and cache.
#[derive(Debug)]
pub struct StoresManager {
  dispatcher: Arc<Dispatcher>,
  cache: Arc<Cache>,
}

#[derive(Debug)]
pub struct StoresManagerArgs {
  pub config: Config,
  pub network: Arc<dyn Network>,
  pub cache: Arc<Cache>,
}

impl StoresManager {
  pub fn new(args: StoresManagerArgs) -> Result<Self, InternalError> {
    let mk_err = |msg: &str, err: Box<dyn std::error::Error + Send + Sync>| InternalError {
      temp: false,
      err,
      msg: msg.to_string(),
      path: "stores.manager.new".into(),
    };

    let base_url = args.config.service.base_url;
    validate_url_target(&base_url).map_err(|err| mk_err("invalid service base url", Box::new(err)))?;

    let store_args = StoreArgs {
      remote: Remote::new(RemoteArgs { network: args.network, base_url }),
      cache: args.cache.clone(),
      config: Arc::new(args.config.sync),
    };

    let dispatcher = Dispatcher::new();
    let registered = [
      dispatcher.register(AccountStore::new(store_args.clone())),
      dispatcher.register(CouponStore::new(store_args.clone())),
      dispatcher.register(DomainStore::new(store_args.clone())),
      dispatcher.register(OrderStore::new(store_args.clone())),
      dispatcher.register(OrderStatusStore::new(store_args.clone())),
      dispatcher.register(ProductStore::new(store_args.clone())),
      dispatcher.register(ProductAttributeStore::new(store_args.clone())),
      dispatcher.register(ProductAttributeTermStore::new(store_args.clone())),
      dispatcher.register(ProductTagStore::new(store_args.clone())),
      dispatcher.register(ProductVariationStore::new(store_args.clone())),
      dispatcher.register(RefundStore::new(store_args.clone())),
      dispatcher.register(SiteStore::new(store_args.clone())),
      dispatcher.register(StatsStore::new(store_args)),
    ];
    for result in registered {
      result.map_err(|err| mk_err("failed to register store", Box::new(err)))?;
    }

    info!(path = "stores.manager.new", env = %args.config.service.env, "stores registered");
    Ok(Self { dispatcher: Arc::new(dispatcher), cache: args.cache })
  }

  pub fn dispatcher(&self) -> Arc<dyn ActionSink> {
    self.dispatcher.clone()
  }

  pub fn cache(&self) -> Arc<Cache> {
    self.cache.clone()
  }
}
