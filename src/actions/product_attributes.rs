use crate::{actions::Completion, models::attributes::ProductAttribute};

#[derive(Debug)]
pub enum ProductAttributeAction {
  SynchronizeProductAttributes {
    site_id: i64,
    on_completion: Completion<Vec<ProductAttribute>>,
  },
  AddProductAttribute {
    site_id: i64,
    name: String,
    on_completion: Completion<ProductAttribute>,
  },
  DeleteProductAttribute {
    site_id: i64,
    attribute_id: i64,
    on_completion: Completion<ProductAttribute>,
  },
}
