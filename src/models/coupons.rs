use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
  #[default]
  Percent,
  FixedCart,
  FixedProduct,
  #[serde(other)]
  Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(rename = "id")]
  pub coupon_id: i64,
  pub code: String,
  pub amount: String,
  #[serde(default, rename = "date_created_gmt")]
  pub date_created: Option<NaiveDateTime>,
  #[serde(default, rename = "date_modified_gmt")]
  pub date_modified: Option<NaiveDateTime>,
  #[serde(default)]
  pub discount_type: DiscountType,
  #[serde(default)]
  pub description: String,
  #[serde(default, rename = "date_expires_gmt")]
  pub date_expires: Option<NaiveDateTime>,
  #[serde(default)]
  pub usage_count: i64,
  #[serde(default)]
  pub individual_use: bool,
  #[serde(default)]
  pub product_ids: Vec<i64>,
  #[serde(default)]
  pub excluded_product_ids: Vec<i64>,
  #[serde(default)]
  pub usage_limit: Option<i64>,
  #[serde(default)]
  pub usage_limit_per_user: Option<i64>,
  #[serde(default)]
  pub free_shipping: bool,
  #[serde(default)]
  pub minimum_amount: String,
  #[serde(default)]
  pub maximum_amount: String,
  #[serde(default)]
  pub email_restrictions: Vec<String>,
}

impl Coupon {
  pub fn with_site_id(self, site_id: i64) -> Self {
    Coupon { site_id, ..self }
  }
}

impl Record for Coupon {
  type Key = (i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.coupon_id)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CouponReport {
  pub coupon_id: i64,
  pub amount: f64,
  pub orders_count: i64,
}

/// Coupons matched by a keyword search, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponSearchResult {
  pub site_id: i64,
  pub keyword: String,
  pub coupon_ids: BTreeSet<i64>,
}

impl Record for CouponSearchResult {
  type Key = (i64, String);

  fn key(&self) -> Self::Key {
    (self.site_id, self.keyword.clone())
  }
}
