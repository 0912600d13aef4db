use http::Method;

use crate::{
  models::{errors::StoreError, products::ProductVariation},
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_all_product_variations(
    &self,
    site_id: i64,
    product_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<ProductVariation>, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("products/{product_id}/variations"))
      .param("page", page_number)
      .param("per_page", page_size);

    let variations: Vec<ProductVariation> = self.enqueue(request).await?;
    Ok(variations.into_iter().map(|v| v.with_parent(site_id, product_id)).collect())
  }

  pub async fn load_product_variation(
    &self,
    site_id: i64,
    product_id: i64,
    variation_id: i64,
  ) -> Result<ProductVariation, StoreError> {
    let path = format!("products/{product_id}/variations/{variation_id}");
    let variation: ProductVariation = self.enqueue(Request::woo(Method::GET, site_id, path)).await?;
    Ok(variation.with_parent(site_id, product_id))
  }

  pub async fn update_product_variation(
    &self,
    variation: &ProductVariation,
  ) -> Result<ProductVariation, StoreError> {
    let (site_id, product_id) = (variation.site_id, variation.product_id);
    let path = format!("products/{product_id}/variations/{}", variation.variation_id);
    let request = Request::woo(Method::PUT, site_id, path).body(serde_json::to_value(variation)?);

    let updated: ProductVariation = self.enqueue(request).await?;
    Ok(updated.with_parent(site_id, product_id))
  }
}
