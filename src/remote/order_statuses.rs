use http::Method;

use crate::{
  models::{errors::StoreError, order_statuses::OrderStatus},
  network::Request,
  remote::Remote,
};

impl Remote {
  /// Order totals per status, which doubles as the list of known statuses.
  pub async fn load_order_statuses(&self, site_id: i64) -> Result<Vec<OrderStatus>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "reports/orders/totals");
    let statuses: Vec<OrderStatus> = self.enqueue(request).await?;
    Ok(statuses.into_iter().map(|s| s.with_site_id(site_id)).collect())
  }
}
