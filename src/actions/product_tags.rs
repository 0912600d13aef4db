use crate::{actions::Completion, models::tags::ProductTag};

#[derive(Debug)]
pub enum ProductTagAction {
  /// Synchronizes every page of tags for the site.
  SynchronizeAllProductTags {
    site_id: i64,
    on_completion: Completion<()>,
  },
  AddProductTags {
    site_id: i64,
    tags: Vec<String>,
    on_completion: Completion<Vec<ProductTag>>,
  },
  DeleteProductTags {
    site_id: i64,
    ids: Vec<i64>,
    on_completion: Completion<Vec<ProductTag>>,
  },
}
