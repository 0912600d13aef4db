use http::Method;
use serde_json::json;

use crate::{
  models::{
    errors::StoreError,
    tags::{ProductTag, ProductTagBatch},
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_all_product_tags(
    &self,
    site_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<ProductTag>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "products/tags")
      .param("page", page_number)
      .param("per_page", page_size);

    let tags: Vec<ProductTag> = self.enqueue(request).await?;
    Ok(tags.into_iter().map(|t| t.with_site_id(site_id)).collect())
  }

  /// Tags that already exist come back as error entries and are left out.
  pub async fn create_product_tags(
    &self,
    site_id: i64,
    names: &[String],
  ) -> Result<Vec<ProductTag>, StoreError> {
    let create: Vec<_> = names.iter().map(|name| json!({ "name": name })).collect();
    let request =
      Request::woo(Method::POST, site_id, "products/tags/batch").body(json!({ "create": create }));

    let batch: ProductTagBatch = self.enqueue(request).await?;
    Ok(ProductTagBatch::into_tags(batch.create, site_id))
  }

  pub async fn delete_product_tags(
    &self,
    site_id: i64,
    ids: &[i64],
  ) -> Result<Vec<ProductTag>, StoreError> {
    let request =
      Request::woo(Method::POST, site_id, "products/tags/batch").body(json!({ "delete": ids }));

    let batch: ProductTagBatch = self.enqueue(request).await?;
    Ok(ProductTagBatch::into_tags(batch.delete, site_id))
  }
}
