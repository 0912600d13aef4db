use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
  actions::{Action, ActionDomain, RefundAction},
  models::{
    config::SyncConfig,
    errors::{NetworkError, StoreError},
    refunds::Refund,
  },
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile},
    Cache,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct RefundStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl RefundStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for RefundStore {
  type Operation = RefundAction;

  fn domain() -> ActionDomain {
    ActionDomain::Refund
  }

  fn accepts(action: Action) -> Result<RefundAction, Action> {
    match action {
      Action::Refund(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: RefundAction) {
    match operation {
      RefundAction::SynchronizeRefunds { site_id, order_id, page_number, page_size, on_completion } => {
        on_completion.complete(synchronize_refunds(self, site_id, order_id, page_number, page_size).await)
      }
      RefundAction::RetrieveRefund { site_id, order_id, refund_id, on_completion } => {
        on_completion.complete(retrieve_refund(self, site_id, order_id, refund_id).await)
      }
      RefundAction::RetrieveRefunds { site_id, order_id, refund_ids, on_completion } => {
        on_completion.complete(retrieve_refunds(self, site_id, order_id, &refund_ids).await)
      }
      RefundAction::CreateRefund { site_id, order_id, refund, on_completion } => {
        on_completion.complete(create_refund(self, site_id, order_id, refund).await)
      }
      RefundAction::ResetStoredRefunds { on_completion } => {
        on_completion.complete(Ok(reset_stored_refunds(self)))
      }
    }
  }
}

async fn synchronize_refunds(
  s: &RefundStore,
  site_id: i64,
  order_id: i64,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  let refunds = s.remote.load_all_refunds(site_id, order_id, page_number, page_size).await?;

  let is_first_page = s.config.is_first_page(page_number);
  let summary = s.cache.write(|t| {
    reconcile(t, &refunds, |r: &Refund| r.site_id == site_id && r.order_id == order_id, is_first_page)
  });
  debug!(path = "stores.refunds.synchronize_refunds", site_id, order_id, page_number, ?summary, "reconciled");

  Ok(has_next_page(refunds.len(), page_size))
}

async fn retrieve_refund(
  s: &RefundStore,
  site_id: i64,
  order_id: i64,
  refund_id: i64,
) -> Result<Refund, StoreError> {
  match s.remote.load_refund(site_id, order_id, refund_id).await {
    Ok(refund) => {
      s.cache.upsert(refund.clone());
      Ok(refund)
    }
    Err(err @ StoreError::Network(NetworkError::NotFound { .. })) => {
      s.cache.delete::<Refund>(&(site_id, order_id, refund_id));
      Err(err)
    }
    Err(err) => Err(err),
  }
}

/// Upserts the listed refunds without touching the order's other refunds.
async fn retrieve_refunds(
  s: &RefundStore,
  site_id: i64,
  order_id: i64,
  refund_ids: &[i64],
) -> Result<(), StoreError> {
  let refunds = s.remote.load_refunds(site_id, order_id, refund_ids).await?;
  s.cache.write(|t| reconcile(t, &refunds, |r: &Refund| r.site_id == site_id && r.order_id == order_id, false));
  Ok(())
}

async fn create_refund(
  s: &RefundStore,
  site_id: i64,
  order_id: i64,
  refund: Refund,
) -> Result<Refund, StoreError> {
  let created = s.remote.create_refund(site_id, order_id, &refund).await?;
  s.cache.upsert(created.clone());
  Ok(created)
}

fn reset_stored_refunds(s: &RefundStore) {
  let deleted = s.cache.write(|t| t.delete_all::<Refund>());
  debug!(path = "stores.refunds.reset_stored_refunds", deleted, "cleared");
}
