use crate::{actions::Completion, models::attributes::ProductAttributeTerm};

#[derive(Debug)]
pub enum ProductAttributeTermAction {
  /// Synchronizes every page of terms for the attribute.
  SynchronizeProductAttributeTerms {
    site_id: i64,
    attribute_id: i64,
    on_completion: Completion<()>,
  },
  CreateProductAttributeTerm {
    site_id: i64,
    attribute_id: i64,
    name: String,
    on_completion: Completion<ProductAttributeTerm>,
  },
}
