use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
  Draft,
  Pending,
  #[default]
  Publish,
  Private,
  #[serde(other)]
  Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTagRef {
  pub id: i64,
  pub name: String,
  pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(rename = "id")]
  pub product_id: i64,
  pub name: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub permalink: String,
  #[serde(default, rename = "type")]
  pub product_type: String,
  #[serde(default)]
  pub status: ProductStatus,
  #[serde(default)]
  pub sku: Option<String>,
  #[serde(default)]
  pub price: String,
  #[serde(default)]
  pub regular_price: String,
  #[serde(default)]
  pub sale_price: String,
  #[serde(default)]
  pub manage_stock: bool,
  #[serde(default)]
  pub stock_quantity: Option<i64>,
  #[serde(default)]
  pub tags: Vec<ProductTagRef>,
  #[serde(default)]
  pub variations: Vec<i64>,
  #[serde(default, rename = "date_modified_gmt")]
  pub date_modified: Option<NaiveDateTime>,
}

impl Product {
  pub fn with_site_id(self, site_id: i64) -> Self {
    Product { site_id, ..self }
  }
}

impl Record for Product {
  type Key = (i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.product_id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationAttribute {
  #[serde(default)]
  pub id: i64,
  pub name: String,
  pub option: String,
}

/// A variation references its parent product by id, never by pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariation {
  #[serde(default, skip_serializing)]
  pub site_id: i64,
  #[serde(default, skip_serializing)]
  pub product_id: i64,
  #[serde(rename = "id")]
  pub variation_id: i64,
  #[serde(default)]
  pub sku: Option<String>,
  #[serde(default)]
  pub status: ProductStatus,
  #[serde(default)]
  pub price: String,
  #[serde(default)]
  pub regular_price: String,
  #[serde(default)]
  pub sale_price: String,
  #[serde(default)]
  pub manage_stock: bool,
  #[serde(default)]
  pub stock_quantity: Option<i64>,
  #[serde(default)]
  pub attributes: Vec<VariationAttribute>,
  #[serde(default, rename = "date_modified_gmt")]
  pub date_modified: Option<NaiveDateTime>,
}

impl ProductVariation {
  pub fn with_parent(self, site_id: i64, product_id: i64) -> Self {
    ProductVariation { site_id, product_id, ..self }
  }
}

impl Record for ProductVariation {
  type Key = (i64, i64, i64);

  fn key(&self) -> Self::Key {
    (self.site_id, self.product_id, self.variation_id)
  }
}
