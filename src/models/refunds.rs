use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefundItemTax {
  #[serde(rename = "id")]
  pub tax_id: i64,
  #[serde(default)]
  pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefundItem {
  #[serde(rename = "id")]
  pub item_id: i64,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub product_id: i64,
  #[serde(default)]
  pub variation_id: i64,
  /// Negative: refunded quantities are reported as removals.
  #[serde(default)]
  pub quantity: i64,
  #[serde(default)]
  pub total: String,
  #[serde(default)]
  pub taxes: Vec<RefundItemTax>,
}

/// A refund issued against an order. Refunded items and their taxes are
/// stored with the refund and replaced with it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Refund {
  #[serde(default)]
  pub site_id: i64,
  #[serde(default)]
  pub order_id: i64,
  #[serde(rename = "id")]
  pub refund_id: i64,
  #[serde(default, rename = "date_created_gmt")]
  pub date_created: Option<NaiveDateTime>,
  pub amount: String,
  #[serde(default)]
  pub reason: String,
  #[serde(default)]
  pub refunded_by: i64,
  #[serde(default, rename = "refunded_payment")]
  pub is_automated: bool,
  #[serde(default, rename = "line_items")]
  pub items: Vec<RefundItem>,
}

impl Refund {
  pub fn with_ids(self, site_id: i64, order_id: i64) -> Self {
    Refund { site_id, order_id, ..self }
  }
}

impl Record for Refund {
  type Key = (i64, i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.order_id, self.refund_id)
  }
}
