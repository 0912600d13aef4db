mod accounts;
mod coupons;
mod domains;
mod order_statuses;
mod orders;
mod product_attribute_terms;
mod product_attributes;
mod product_tags;
mod product_variations;
mod products;
mod refunds;
mod sites;
mod stats;

pub use accounts::AccountAction;
pub use coupons::CouponAction;
pub use domains::DomainAction;
pub use order_statuses::OrderStatusAction;
pub use orders::OrderAction;
pub use product_attribute_terms::ProductAttributeTermAction;
pub use product_attributes::ProductAttributeAction;
pub use product_tags::ProductTagAction;
pub use product_variations::ProductVariationAction;
pub use products::ProductAction;
pub use refunds::RefundAction;
pub use sites::SiteAction;
pub use stats::StatsAction;

use derive_more::Display;
use tokio::sync::oneshot;

use crate::models::errors::StoreError;

/// Sending half of an action's completion. Consumed by `complete`, so an
/// action can only ever be completed once.
#[derive(Debug)]
pub struct Completion<T> {
  tx: oneshot::Sender<Result<T, StoreError>>,
}

impl<T> Completion<T> {
  pub fn complete(self, result: Result<T, StoreError>) {
    // The caller may have stopped waiting; nothing to deliver to then.
    let _ = self.tx.send(result);
  }
}

/// Receiving half of an action's completion.
#[derive(Debug)]
pub struct Pending<T> {
  rx: oneshot::Receiver<Result<T, StoreError>>,
}

impl<T> Pending<T> {
  pub async fn wait(self) -> Result<T, StoreError> {
    self.rx.await.unwrap_or(Err(StoreError::CompletionDropped))
  }
}

pub fn completion<T>() -> (Completion<T>, Pending<T>) {
  let (tx, rx) = oneshot::channel();
  (Completion { tx }, Pending { rx })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ActionDomain {
  #[display("account")]
  Account,
  #[display("coupon")]
  Coupon,
  #[display("domain")]
  Domain,
  #[display("order")]
  Order,
  #[display("order_status")]
  OrderStatus,
  #[display("product")]
  Product,
  #[display("product_attribute")]
  ProductAttribute,
  #[display("product_attribute_term")]
  ProductAttributeTerm,
  #[display("product_tag")]
  ProductTag,
  #[display("product_variation")]
  ProductVariation,
  #[display("refund")]
  Refund,
  #[display("site")]
  Site,
  #[display("stats")]
  Stats,
}

/// One value per requested operation, routed by domain.
#[derive(Debug)]
pub enum Action {
  Account(AccountAction),
  Coupon(CouponAction),
  Domain(DomainAction),
  Order(OrderAction),
  OrderStatus(OrderStatusAction),
  Product(ProductAction),
  ProductAttribute(ProductAttributeAction),
  ProductAttributeTerm(ProductAttributeTermAction),
  ProductTag(ProductTagAction),
  ProductVariation(ProductVariationAction),
  Refund(RefundAction),
  Site(SiteAction),
  Stats(StatsAction),
}

macro_rules! domain_actions {
  ($($variant:ident => $action:ty),+ $(,)?) => {
    impl Action {
      pub fn domain(&self) -> ActionDomain {
        match self {
          $(Action::$variant(_) => ActionDomain::$variant,)+
        }
      }
    }

    $(
      impl From<$action> for Action {
        fn from(action: $action) -> Self {
          Action::$variant(action)
        }
      }
    )+
  };
}

domain_actions! {
  Account => AccountAction,
  Coupon => CouponAction,
  Domain => DomainAction,
  Order => OrderAction,
  OrderStatus => OrderStatusAction,
  Product => ProductAction,
  ProductAttribute => ProductAttributeAction,
  ProductAttributeTerm => ProductAttributeTermAction,
  ProductTag => ProductTagAction,
  ProductVariation => ProductVariationAction,
  Refund => RefundAction,
  Site => SiteAction,
  Stats => StatsAction,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn completion_delivers_exactly_one_result() {
    let (done, pending) = completion::<u32>();
    done.complete(Ok(7));
    assert_eq!(pending.wait().await.unwrap(), 7);
  }

  #[tokio::test]
  async fn dropped_completion_is_reported() {
    let (done, pending) = completion::<u32>();
    drop(done);
    assert!(matches!(pending.wait().await, Err(StoreError::CompletionDropped)));
  }

  #[test]
  fn actions_know_their_domain() {
    let (done, _pending) = completion();
    let action: Action = StatsAction::ResetStoredStats { on_completion: done }.into();
    assert_eq!(action.domain(), ActionDomain::Stats);
    assert_eq!(action.domain().to_string(), "stats");
  }
}
