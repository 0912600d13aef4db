use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
  actions::{Action, ActionDomain, OrderStatusAction},
  models::{errors::StoreError, order_statuses::OrderStatus},
  remote::Remote,
  storage::{reconcile::reconcile, Cache},
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct OrderStatusStore {
  remote: Remote,
  cache: Arc<Cache>,
}

impl OrderStatusStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache }
  }
}

#[async_trait]
impl Store for OrderStatusStore {
  type Operation = OrderStatusAction;

  fn domain() -> ActionDomain {
    ActionDomain::OrderStatus
  }

  fn accepts(action: Action) -> Result<OrderStatusAction, Action> {
    match action {
      Action::OrderStatus(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: OrderStatusAction) {
    match operation {
      OrderStatusAction::RetrieveOrderStatuses { site_id, on_completion } => {
        on_completion.complete(retrieve_order_statuses(self, site_id).await)
      }
      OrderStatusAction::ResetStoredOrderStatuses { on_completion } => {
        let deleted = self.cache.delete_all::<OrderStatus>();
        debug!(path = "stores.order_statuses.reset", deleted, "cleared");
        on_completion.complete(Ok(()))
      }
    }
  }
}

async fn retrieve_order_statuses(
  s: &OrderStatusStore,
  site_id: i64,
) -> Result<Vec<OrderStatus>, StoreError> {
  let statuses = s.remote.load_order_statuses(site_id).await?;

  let summary = s.cache.write(|t| reconcile(t, &statuses, |o: &OrderStatus| o.site_id == site_id, true));
  debug!(path = "stores.order_statuses.retrieve_order_statuses", site_id, ?summary, "reconciled");

  Ok(statuses)
}
