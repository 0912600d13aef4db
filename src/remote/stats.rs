use chrono::NaiveDate;
use http::Method;

use crate::{
  models::{
    errors::StoreError,
    stats::{SiteVisitStats, SiteVisitStatsEnvelope, StatGranularity},
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_site_visit_stats(
    &self,
    site_id: i64,
    granularity: StatGranularity,
    latest_date: NaiveDate,
    quantity: u32,
  ) -> Result<SiteVisitStats, StoreError> {
    let request = Request::dotcom(Method::GET, format!("sites/{site_id}/stats/visits"))
      .param("unit", granularity)
      .param("date", latest_date.format("%Y-%m-%d"))
      .param("quantity", quantity)
      .param("stat_fields", "views,visitors");

    let envelope: SiteVisitStatsEnvelope = self.enqueue(request).await?;
    Ok(envelope.into_stats(site_id))
  }
}
