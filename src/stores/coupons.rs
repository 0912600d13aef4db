use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, error};

use crate::{
  actions::{Action, ActionDomain, CouponAction},
  models::{
    config::SyncConfig,
    coupons::{Coupon, CouponReport, CouponSearchResult},
    errors::StoreError,
  },
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile},
    Cache, Record,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct CouponStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl CouponStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for CouponStore {
  type Operation = CouponAction;

  fn domain() -> ActionDomain {
    ActionDomain::Coupon
  }

  fn accepts(action: Action) -> Result<CouponAction, Action> {
    match action {
      Action::Coupon(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: CouponAction) {
    match operation {
      CouponAction::SynchronizeCoupons { site_id, page_number, page_size, on_completion } => {
        on_completion.complete(synchronize_coupons(self, site_id, page_number, page_size).await)
      }
      CouponAction::DeleteCoupon { site_id, coupon_id, on_completion } => {
        on_completion.complete(delete_coupon(self, site_id, coupon_id).await)
      }
      CouponAction::UpdateCoupon { coupon, on_completion } => {
        on_completion.complete(update_coupon(self, coupon).await)
      }
      CouponAction::CreateCoupon { coupon, on_completion } => {
        on_completion.complete(create_coupon(self, coupon).await)
      }
      CouponAction::LoadCouponReport { site_id, coupon_id, start_date, on_completion } => {
        on_completion.complete(load_coupon_report(self, site_id, coupon_id, start_date).await)
      }
      CouponAction::SearchCoupons { site_id, keyword, page_number, page_size, on_completion } => {
        on_completion.complete(search_coupons(self, site_id, keyword, page_number, page_size).await)
      }
      CouponAction::RetrieveCoupon { site_id, coupon_id, on_completion } => {
        on_completion.complete(retrieve_coupon(self, site_id, coupon_id).await)
      }
    }
  }
}

async fn synchronize_coupons(
  s: &CouponStore,
  site_id: i64,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  let coupons = s.remote.load_all_coupons(site_id, page_number, page_size).await?;

  let is_first_page = s.config.is_first_page(page_number);
  let summary =
    s.cache.write(|t| reconcile(t, &coupons, |c: &Coupon| c.site_id == site_id, is_first_page));
  debug!(path = "stores.coupons.synchronize_coupons", site_id, page_number, ?summary, "reconciled");

  Ok(has_next_page(coupons.len(), page_size))
}

async fn delete_coupon(s: &CouponStore, site_id: i64, coupon_id: i64) -> Result<(), StoreError> {
  // Coupon payloads carry no site, so only the echoed id can disagree.
  let deleted = s.remote.delete_coupon(site_id, coupon_id).await?;
  if deleted.coupon_id != coupon_id {
    error!(
      path = "stores.coupons.delete_coupon",
      site_id, coupon_id, deleted_id = deleted.coupon_id, "backend deleted another coupon"
    );
    return Err(StoreError::UnexpectedCouponDeleted);
  }

  s.cache.write(|t| {
    t.delete::<Coupon>(&deleted.key());
    let results = t.all::<CouponSearchResult>(|r| r.site_id == site_id);
    for result in results {
      t.update::<CouponSearchResult>(&result.key(), |r| {
        r.coupon_ids.remove(&coupon_id);
      });
    }
  });
  Ok(())
}

async fn update_coupon(s: &CouponStore, coupon: Coupon) -> Result<Coupon, StoreError> {
  let updated = s.remote.update_coupon(&coupon).await?;
  s.cache.upsert(updated.clone());
  Ok(updated)
}

async fn create_coupon(s: &CouponStore, coupon: Coupon) -> Result<Coupon, StoreError> {
  let created = s.remote.create_coupon(&coupon).await?;
  s.cache.upsert(created.clone());
  Ok(created)
}

async fn load_coupon_report(
  s: &CouponStore,
  site_id: i64,
  coupon_id: i64,
  start_date: NaiveDate,
) -> Result<CouponReport, StoreError> {
  s.remote.load_coupon_report(site_id, coupon_id, start_date).await
}

/// Matches accumulate under the keyword across pages.
async fn search_coupons(
  s: &CouponStore,
  site_id: i64,
  keyword: String,
  page_number: u32,
  page_size: u32,
) -> Result<(), StoreError> {
  let coupons = s.remote.search_coupons(site_id, &keyword, page_number, page_size).await?;

  s.cache.write(|t| {
    reconcile(t, &coupons, |c: &Coupon| c.site_id == site_id, false);

    let key = (site_id, keyword.clone());
    let ids = coupons.iter().map(|c| c.coupon_id);
    if !t.update::<CouponSearchResult>(&key, |r| r.coupon_ids.extend(ids.clone())) {
      t.insert(CouponSearchResult { site_id, keyword, coupon_ids: ids.collect() });
    }
  });
  Ok(())
}

async fn retrieve_coupon(s: &CouponStore, site_id: i64, coupon_id: i64) -> Result<Coupon, StoreError> {
  let coupon = s.remote.load_coupon(site_id, coupon_id).await?;
  s.cache.upsert(coupon.clone());
  Ok(coupon)
}
