use crate::{actions::Completion, models::products::ProductVariation};

#[derive(Debug)]
pub enum ProductVariationAction {
  /// Completes with `true` when another page is likely available.
  SynchronizeProductVariations {
    site_id: i64,
    product_id: i64,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<bool>,
  },
  RetrieveProductVariation {
    site_id: i64,
    product_id: i64,
    variation_id: i64,
    on_completion: Completion<ProductVariation>,
  },
  UpdateProductVariation {
    variation: ProductVariation,
    on_completion: Completion<ProductVariation>,
  },
}
