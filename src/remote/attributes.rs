use http::Method;
use serde_json::json;

use crate::{
  models::{
    attributes::{ProductAttribute, ProductAttributeTerm},
    errors::StoreError,
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  /// Global attributes are not paged by the backend.
  pub async fn load_all_product_attributes(
    &self,
    site_id: i64,
  ) -> Result<Vec<ProductAttribute>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "products/attributes");
    let attributes: Vec<ProductAttribute> = self.enqueue(request).await?;
    Ok(attributes.into_iter().map(|a| a.with_site_id(site_id)).collect())
  }

  pub async fn create_product_attribute(
    &self,
    site_id: i64,
    name: &str,
  ) -> Result<ProductAttribute, StoreError> {
    let request = Request::woo(Method::POST, site_id, "products/attributes")
      .body(json!({ "name": name, "type": "select", "order_by": "menu_order", "has_archives": false }));

    let attribute: ProductAttribute = self.enqueue(request).await?;
    Ok(attribute.with_site_id(site_id))
  }

  pub async fn delete_product_attribute(
    &self,
    site_id: i64,
    attribute_id: i64,
  ) -> Result<ProductAttribute, StoreError> {
    let request =
      Request::woo(Method::DELETE, site_id, format!("products/attributes/{attribute_id}"))
        .param("force", true);

    let attribute: ProductAttribute = self.enqueue(request).await?;
    Ok(attribute.with_site_id(site_id))
  }

  pub async fn load_product_attribute_terms(
    &self,
    site_id: i64,
    attribute_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<ProductAttributeTerm>, StoreError> {
    let path = format!("products/attributes/{attribute_id}/terms");
    let request = Request::woo(Method::GET, site_id, path)
      .param("page", page_number)
      .param("per_page", page_size);

    let terms: Vec<ProductAttributeTerm> = self.enqueue(request).await?;
    Ok(terms.into_iter().map(|t| t.with_parent(site_id, attribute_id)).collect())
  }

  pub async fn create_product_attribute_term(
    &self,
    site_id: i64,
    attribute_id: i64,
    name: &str,
  ) -> Result<ProductAttributeTerm, StoreError> {
    let path = format!("products/attributes/{attribute_id}/terms");
    let request = Request::woo(Method::POST, site_id, path).body(json!({ "name": name }));

    let term: ProductAttributeTerm = self.enqueue(request).await?;
    Ok(term.with_parent(site_id, attribute_id))
  }
}
