use chrono::NaiveDate;
use http::Method;

use crate::{
  models::{
    coupons::{Coupon, CouponReport},
    errors::StoreError,
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_all_coupons(
    &self,
    site_id: i64,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Coupon>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "coupons")
      .param("page", page_number)
      .param("per_page", page_size);

    let coupons: Vec<Coupon> = self.enqueue(request).await?;
    Ok(coupons.into_iter().map(|c| c.with_site_id(site_id)).collect())
  }

  pub async fn search_coupons(
    &self,
    site_id: i64,
    keyword: &str,
    page_number: u32,
    page_size: u32,
  ) -> Result<Vec<Coupon>, StoreError> {
    let request = Request::woo(Method::GET, site_id, "coupons")
      .param("search", keyword)
      .param("page", page_number)
      .param("per_page", page_size);

    let coupons: Vec<Coupon> = self.enqueue(request).await?;
    Ok(coupons.into_iter().map(|c| c.with_site_id(site_id)).collect())
  }

  pub async fn load_coupon(&self, site_id: i64, coupon_id: i64) -> Result<Coupon, StoreError> {
    let request = Request::woo(Method::GET, site_id, format!("coupons/{coupon_id}"));
    let coupon: Coupon = self.enqueue(request).await?;
    Ok(coupon.with_site_id(site_id))
  }

  pub async fn update_coupon(&self, coupon: &Coupon) -> Result<Coupon, StoreError> {
    let site_id = coupon.site_id;
    let request = Request::woo(Method::PUT, site_id, format!("coupons/{}", coupon.coupon_id))
      .body(serde_json::to_value(coupon)?);

    let updated: Coupon = self.enqueue(request).await?;
    Ok(updated.with_site_id(site_id))
  }

  pub async fn create_coupon(&self, coupon: &Coupon) -> Result<Coupon, StoreError> {
    let site_id = coupon.site_id;
    let mut body = serde_json::to_value(coupon)?;
    if let Some(fields) = body.as_object_mut() {
      fields.remove("id");
    }

    let request = Request::woo(Method::POST, site_id, "coupons").body(body);
    let created: Coupon = self.enqueue(request).await?;
    Ok(created.with_site_id(site_id))
  }

  /// Deletes permanently: coupons do not support the trash.
  pub async fn delete_coupon(&self, site_id: i64, coupon_id: i64) -> Result<Coupon, StoreError> {
    let request =
      Request::woo(Method::DELETE, site_id, format!("coupons/{coupon_id}")).param("force", true);

    let deleted: Coupon = self.enqueue(request).await?;
    Ok(deleted.with_site_id(site_id))
  }

  pub async fn load_coupon_report(
    &self,
    site_id: i64,
    coupon_id: i64,
    start_date: NaiveDate,
  ) -> Result<CouponReport, StoreError> {
    let request = Request::woo(Method::GET, site_id, "reports/coupons")
      .param("coupons", coupon_id)
      .param("after", format!("{start_date}T00:00:00"));

    let reports: Vec<CouponReport> = self.enqueue(request).await?;
    reports.into_iter().find(|r| r.coupon_id == coupon_id).ok_or(StoreError::EmptyResponse)
  }
}
