use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain, OrderAction},
  models::{
    config::SyncConfig,
    errors::{NetworkError, StoreError},
    orders::{Order, OrderSearchResult},
  },
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile},
    Cache, Record, Tables,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct OrderStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl OrderStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for OrderStore {
  type Operation = OrderAction;

  fn domain() -> ActionDomain {
    ActionDomain::Order
  }

  fn accepts(action: Action) -> Result<OrderAction, Action> {
    match action {
      Action::Order(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: OrderAction) {
    match operation {
      OrderAction::SynchronizeOrders { site_id, statuses, page_number, page_size, on_completion } => {
        on_completion.complete(synchronize_orders(self, site_id, statuses, page_number, page_size).await)
      }
      OrderAction::RetrieveOrder { site_id, order_id, on_completion } => {
        on_completion.complete(retrieve_order(self, site_id, order_id).await)
      }
      OrderAction::SearchOrders { site_id, keyword, page_number, page_size, on_completion } => {
        on_completion.complete(search_orders(self, site_id, keyword, page_number, page_size).await)
      }
      OrderAction::DeleteOrder { site_id, order, delete_permanently, on_completion } => {
        on_completion.complete(delete_order(self, site_id, order, delete_permanently).await)
      }
      OrderAction::CheckIfStoreHasOrders { site_id, on_completion } => {
        on_completion.complete(check_if_store_has_orders(self, site_id).await)
      }
      OrderAction::ResetStoredOrders { on_completion } => {
        on_completion.complete(Ok(reset_stored_orders(self)))
      }
    }
  }
}

/// The first page sweeps the site's orders with the requested statuses.
/// Orders kept only as search results are never swept.
async fn synchronize_orders(
  s: &OrderStore,
  site_id: i64,
  statuses: Vec<String>,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  let orders = s.remote.load_all_orders(site_id, &statuses, page_number, page_size).await?;

  let is_first_page = s.config.is_first_page(page_number);
  let in_scope = |o: &Order| {
    o.site_id == site_id
      && !o.exclusive_for_search
      && (statuses.is_empty() || statuses.contains(&o.status))
  };
  let summary = s.cache.write(|t| reconcile(t, &orders, in_scope, is_first_page));
  debug!(path = "stores.orders.synchronize_orders", site_id, page_number, ?summary, "reconciled");

  Ok(has_next_page(orders.len(), page_size))
}

/// A 404 means the order is gone on the backend; the stored copy goes too.
async fn retrieve_order(s: &OrderStore, site_id: i64, order_id: i64) -> Result<Order, StoreError> {
  match s.remote.load_order(site_id, order_id).await {
    Ok(order) => {
      s.cache.upsert(order.clone());
      Ok(order)
    }
    Err(err @ StoreError::Network(NetworkError::NotFound { .. })) => {
      s.cache.write(|t| forget_order(t, site_id, order_id));
      debug!(path = "stores.orders.retrieve_order", site_id, order_id, "order gone, removed");
      Err(err)
    }
    Err(err) => Err(err),
  }
}

/// Orders first seen through a search are flagged as search-only; orders
/// already stored keep their flag.
async fn search_orders(
  s: &OrderStore,
  site_id: i64,
  keyword: String,
  page_number: u32,
  page_size: u32,
) -> Result<(), StoreError> {
  let orders = s.remote.search_orders(site_id, &keyword, page_number, page_size).await?;

  s.cache.write(|t| {
    for order in &orders {
      let exclusive_for_search = t.load::<Order>(&order.key()).is_none_or(|o| o.exclusive_for_search);
      t.upsert(Order { exclusive_for_search, ..order.clone() });
    }

    let key = (site_id, keyword.clone());
    let ids = orders.iter().map(|o| o.order_id);
    if !t.update::<OrderSearchResult>(&key, |r| r.order_ids.extend(ids.clone())) {
      t.insert(OrderSearchResult { site_id, keyword, order_ids: ids.collect() });
    }
  });
  Ok(())
}

/// Removes the order up front and puts it back if the backend refuses,
/// except auto-drafts, which are never kept.
async fn delete_order(
  s: &OrderStore,
  site_id: i64,
  order: Order,
  delete_permanently: bool,
) -> Result<Order, StoreError> {
  let order_id = order.order_id;
  let stored = s.cache.delete::<Order>(&(site_id, order_id));

  match s.remote.delete_order(site_id, order_id, delete_permanently).await {
    Ok(deleted) => {
      s.cache.write(|t| forget_order(t, site_id, order_id));
      Ok(deleted)
    }
    Err(err) => {
      if !order.is_auto_draft() {
        s.cache.upsert(stored.unwrap_or_else(|| order.with_site_id(site_id)));
      }
      warn!(path = "stores.orders.delete_order", site_id, order_id, "delete failed: {}", err);
      Err(err)
    }
  }
}

async fn check_if_store_has_orders(s: &OrderStore, site_id: i64) -> Result<bool, StoreError> {
  if s.cache.count::<Order>(|o| o.site_id == site_id) > 0 {
    return Ok(true);
  }

  let orders = s.remote.load_all_orders(site_id, &[], s.config.first_page_number, 1).await?;
  Ok(!orders.is_empty())
}

fn reset_stored_orders(s: &OrderStore) {
  let deleted = s.cache.write(|t| t.delete_all::<Order>() + t.delete_all::<OrderSearchResult>());
  debug!(path = "stores.orders.reset_stored_orders", deleted, "cleared");
}

fn forget_order(t: &mut Tables, site_id: i64, order_id: i64) {
  t.delete::<Order>(&(site_id, order_id));
  for result in t.all::<OrderSearchResult>(|r| r.site_id == site_id) {
    t.update::<OrderSearchResult>(&result.key(), |r| {
      r.order_ids.remove(&order_id);
    });
  }
}
