use chrono::NaiveDate;

use crate::{
  actions::Completion,
  models::stats::{SiteVisitStats, StatGranularity},
};

#[derive(Debug)]
pub enum StatsAction {
  RetrieveSiteVisitStats {
    site_id: i64,
    granularity: StatGranularity,
    latest_date: NaiveDate,
    quantity: u32,
    on_completion: Completion<SiteVisitStats>,
  },
  ResetStoredStats {
    on_completion: Completion<()>,
  },
}
