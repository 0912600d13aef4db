use http::Method;

use crate::{
  models::{errors::StoreError, orders::Order},
  network::Request,
  remote::Remote,
};

impl Remote {
  /// An empty `statuses` list loads orders of every status.
  pub async fn load_all_orders(
    &self,
    site_id: i64,
    statuses: &[String],
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Order>, StoreError> {
    let mut request = Request::woo(Method::GET, site_id, "orders")
      .param("page", page_number)
      .param("per_page", page_size)
      .param("orderby", "date")
      .param("order", "desc");
    if !statuses.is_empty() {
      request = request.param("status", statuses.join(","));
    }

    let orders: Vec<Order> = self.enqueue(request).await?;
    Ok(orders.into_iter().map(|o| o.with_site_id(site_id)).collect())
  }

  pub async fn search_orders(
    &self,
    site_id: i64,
    keyword: &str,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Order>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "orders")
      .param("search", keyword)
      .param("page", page_number)
      .param("per_page", page_size);

    let orders: Vec<Order> = self.enqueue(request).await?;
    Ok(orders.into_iter().map(|o| o.with_site_id(site_id)).collect())
  }

  pub async fn load_order(&self, site_id: i64, order_id: i64) -> Result<Order, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("orders/{order_id}"));
    let order: Order = self.enqueue(request).await?;
    Ok(order.with_site_id(site_id))
  }

  /// Without `force` the order is moved to the trash.
  pub async fn delete_order(&self, site_id: i64, order_id: i64, force: bool) -> Result<Order, StoreError> {
    let request =
      Request::woo(Method::DELETE, site_id, format!("orders/{order_id}")).param("force", force);

    let deleted: Order = self.enqueue(request).await?;
    Ok(deleted.with_site_id(site_id))
  }
}
