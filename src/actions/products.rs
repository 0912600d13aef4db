use crate::{actions::Completion, models::products::Product};

#[derive(Debug)]
pub enum ProductAction {
  /// Completes with `true` when another page is likely available.
  SynchronizeProducts {
    site_id: i64,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<bool>,
  },
  RetrieveProduct {
    site_id: i64,
    product_id: i64,
    on_completion: Completion<Product>,
  },
  UpdateProduct {
    product: Product,
    on_completion: Completion<Product>,
  },
  ResetStoredProducts {
    on_completion: Completion<()>,
  },
}
