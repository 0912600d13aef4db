use chrono::NaiveDate;

use crate::{
  actions::Completion,
  models::coupons::{Coupon, CouponReport},
};

#[derive(Debug)]
pub enum CouponAction {
  /// Completes with `true` when another page is likely available.
  SynchronizeCoupons {
    site_id: i64,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<bool>,
  },
  DeleteCoupon {
    site_id: i64,
    coupon_id: i64,
    on_completion: Completion<()>,
  },
  UpdateCoupon {
    coupon: Coupon,
    on_completion: Completion<Coupon>,
  },
  CreateCoupon {
    coupon: Coupon,
    on_completion: Completion<Coupon>,
  },
  LoadCouponReport {
    site_id: i64,
    coupon_id: i64,
    start_date: NaiveDate,
    on_completion: Completion<CouponReport>,
  },
  SearchCoupons {
    site_id: i64,
    keyword: String,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<()>,
  },
  RetrieveCoupon {
    site_id: i64,
    coupon_id: i64,
    on_completion: Completion<Coupon>,
  },
}
