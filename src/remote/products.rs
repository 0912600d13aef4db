use http::Method;

use crate::{
  models::{errors::StoreError, products::Product},
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_all_products(
    &self,
    site_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Product>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "products")
      .param("page", page_number)
      .param("per_page", page_size)
      .param("orderby", "date")
      .param("order", "desc");

    let products: Vec<Product> = self.enqueue(request).await?;
    Ok(products.into_iter().map(|p| p.with_site_id(site_id)).collect())
  }

  pub async fn load_product(&self, site_id: i64, product_id: i64) -> Result<Product, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("products/{product_id}"));
    let product: Product = self.enqueue(request).await?;
    Ok(product.with_site_id(site_id))
  }

  pub async fn update_product(&self, product: &Product) -> Result<Product, StoreError> {
    let site_id = product.site_id;
    let request = Request::woo(Method::PUT, site_id, format!("products/{}", product.product_id))
      .body(serde_json::to_value(product)?);

    let updated: Product = self.enqueue(request).await?;
    Ok(updated.with_site_id(site_id))
  }
}
