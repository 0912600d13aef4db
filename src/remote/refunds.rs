use http::Method;
use serde_json::{json, Value};

use crate::{
  models::{errors::StoreError, refunds::Refund},
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_all_refunds(
    &self,
    site_id: i64,
    order_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Refund>, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("orders/{order_id}/refunds"))
      .param("page", page_number)
      .param("per_page", page_size);

    let refunds: Vec<Refund> = self.enqueue(request).await?;
    Ok(refunds.into_iter().map(|r| r.with_ids(site_id, order_id)).collect())
  }

  pub async fn load_refunds(
    &self,
    site_id: i64,
    order_id: i64,
    refund_ids: &[i64],
  ) -> Result<Vec<Refund>, StoreError> {
    let include = refund_ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
    let request =
      Request::woo(Method::GET, site_id, format!("orders/{order_id}/refunds")).param("include", include);

    let refunds: Vec<Refund> = self.enqueue(request).await?;
    Ok(refunds.into_iter().map(|r| r.with_ids(site_id, order_id)).collect())
  }

  pub async fn load_refund(&self, site_id: i64, order_id: i64, refund_id: i64) -> Result<Refund, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("orders/{order_id}/refunds/{refund_id}"));
    let refund: Refund = self.enqueue(request).await?;
    Ok(refund.with_ids(site_id, order_id))
  }

  /// `api_refund` asks the payment gateway to move the money back as well.
  pub async fn create_refund(&self, site_id: i64, order_id: i64, refund: &Refund) -> Result<Refund, StoreError> {
    let line_items: Vec<Value> = refund
      .items
      .iter()
      .map(|item| {
        let taxes: Vec<Value> =
          item.taxes.iter().map(|tax| json!({"id": tax.tax_id, "refund_total": tax.total})).collect();
        json!({
          "id": item.item_id,
          "quantity": item.quantity.abs(),
          "refund_total": item.total,
          "refund_tax": taxes,
        })
      })
      .collect();

    let request = Request::woo(Method::POST, site_id, format!("orders/{order_id}/refunds")).body(json!({
      "amount": refund.amount,
      "reason": refund.reason,
      "api_refund": refund.is_automated,
      "line_items": line_items,
    }));

    let created: Refund = self.enqueue(request).await?;
    Ok(created.with_ids(site_id, order_id))
  }
}
