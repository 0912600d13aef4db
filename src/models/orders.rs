use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Address {
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  #[serde(default)]
  pub company: String,
  #[serde(default)]
  pub address_1: String,
  #[serde(default)]
  pub address_2: String,
  #[serde(default)]
  pub city: String,
  #[serde(default)]
  pub state: String,
  #[serde(default)]
  pub postcode: String,
  #[serde(default)]
  pub country: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderItem {
  #[serde(rename = "id")]
  pub item_id: i64,
  pub name: String,
  #[serde(default)]
  pub product_id: i64,
  #[serde(default)]
  pub variation_id: i64,
  #[serde(default)]
  pub quantity: i64,
  #[serde(default)]
  pub sku: Option<String>,
  #[serde(default)]
  pub subtotal: String,
  #[serde(default)]
  pub total: String,
}

/// Refund summary embedded in an order payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRefundCondensed {
  #[serde(rename = "id")]
  pub refund_id: i64,
  #[serde(default)]
  pub reason: Option<String>,
  pub total: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
  #[serde(default)]
  pub site_id: i64,
  #[serde(rename = "id")]
  pub order_id: i64,
  #[serde(default)]
  pub parent_id: i64,
  #[serde(default)]
  pub number: String,
  pub status: String,
  #[serde(default)]
  pub currency: String,
  #[serde(default, rename = "date_created_gmt")]
  pub date_created: Option<NaiveDateTime>,
  #[serde(default, rename = "date_modified_gmt")]
  pub date_modified: Option<NaiveDateTime>,
  #[serde(default, rename = "date_paid_gmt")]
  pub date_paid: Option<NaiveDateTime>,
  #[serde(default)]
  pub discount_total: String,
  #[serde(default)]
  pub shipping_total: String,
  #[serde(default)]
  pub total_tax: String,
  pub total: String,
  #[serde(default)]
  pub payment_method: String,
  #[serde(default)]
  pub payment_method_title: String,
  #[serde(default)]
  pub customer_id: i64,
  #[serde(default)]
  pub customer_note: Option<String>,
  #[serde(default)]
  pub billing: Option<Address>,
  #[serde(default)]
  pub shipping: Option<Address>,
  #[serde(default, rename = "line_items")]
  pub items: Vec<OrderItem>,
  #[serde(default)]
  pub refunds: Vec<OrderRefundCondensed>,
  /// Set on orders stored only because a keyword search returned them.
  #[serde(skip)]
  pub exclusive_for_search: bool,
}

impl Order {
  pub const AUTO_DRAFT: &'static str = "auto-draft";

  pub fn with_site_id(self, site_id: i64) -> Self {
    Order { site_id, ..self }
  }

  pub fn is_auto_draft(&self) -> bool {
    self.status == Self::AUTO_DRAFT
  }
}

impl Record for Order {
  type Key = (i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.order_id)
  }
}

/// Orders matched by a keyword search, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSearchResult {
  pub site_id: i64,
  pub keyword: String,
  pub order_ids: BTreeSet<i64>,
}

impl Record for OrderSearchResult {
  type Key = (i64, String);

  fn key(&self) -> Self::Key {
    (self.site_id, self.keyword.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn orders_decode_with_sparse_payloads() {
    let order: Order = serde_json::from_value(serde_json::json!({
      "id": 963,
      "status": "auto-draft",
      "total": "0.00",
      "billing": null,
      "line_items": [{"id": 1, "name": "Cap", "quantity": 2, "sku": null}]
    }))
    .unwrap();

    assert!(order.is_auto_draft());
    assert_eq!(order.billing, None);
    assert_eq!(order.items[0].quantity, 2);
    assert!(!order.exclusive_for_search);
    assert_eq!(order.with_site_id(7).key(), (7, 963));
  }
}
