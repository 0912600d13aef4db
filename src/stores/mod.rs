pub mod dispatcher;

mod accounts;
mod attribute_terms;
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

pub use accounts::AccountStore;
pub use attribute_terms::ProductAttributeTermStore;
pub use attributes::ProductAttributeStore;
pub use coupons::CouponStore;
pub use domains::DomainStore;
pub use order_statuses::OrderStatusStore;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use refunds::RefundStore;
pub use sites::SiteStore;
pub use stats::StatsStore;
pub use tags::ProductTagStore;
pub use variations::ProductVariationStore;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tracing::error;

use crate::{
  actions::{Action, ActionDomain},
  models::config::SyncConfig,
  remote::Remote,
  storage::Cache,
};

/// Collaborators every store is built from.
#[derive(Debug, Clone)]
pub struct StoreArgs {
  pub remote: Remote,
  pub cache: Arc<Cache>,
  pub config: Arc<SyncConfig>,
}

/// A per-domain handler. Each operation performs at most one remote call,
/// reconciles the decoded records into the cache on success, and completes
/// the operation's `Completion` exactly once. Failures leave the cache as it
/// was.
#[async_trait]
pub trait Store: fmt::Debug + Clone + Send + Sync + 'static {
  type Operation: Send + 'static;

  fn domain() -> ActionDomain;

  /// Unwraps the domain's operation, handing foreign actions back.
  fn accepts(action: Action) -> Result<Self::Operation, Action>;

  async fn on_action(&self, operation: Self::Operation);
}

/// Type-erased entry the dispatcher routes to.
pub trait ActionProcessor: fmt::Debug + Send + Sync {
  fn handles(&self) -> ActionDomain;

  fn process(&self, action: Action);
}

impl<S: Store> ActionProcessor for S {
  fn handles(&self) -> ActionDomain {
    <S as Store>::domain()
  }

  /// Runs the operation on the tokio runtime; the completion fires on
  /// whichever worker finishes it.
  fn process(&self, action: Action) {
    let path = "stores.process";
    let operation = match S::accepts(action) {
      Ok(operation) => operation,
      Err(action) => {
        error!(path, store = %<S as Store>::domain(), action = %action.domain(), "foreign action dropped");
        return;
      }
    };

    match Handle::try_current() {
      Ok(handle) => {
        let store = self.clone();
        handle.spawn(async move { store.on_action(operation).await });
      }
      Err(err) => error!(path, "no runtime to run the action on: {}", err),
    }
  }
}
